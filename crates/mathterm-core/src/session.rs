//! The per-mode session state machine.
//!
//! Every mode shares one round loop (generate, present, collect, score,
//! accumulate). What differs is carried by [`ModeState`]: which tier the
//! next round uses, when the session ends, and how malformed input or a
//! failing input source is treated.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::clock::Clock;
use crate::error::{MalformedAnswer, QuizResult};
use crate::expression::{Answer, Expression, ExpressionGenerator, Outcome, Reply};
use crate::mode::{GameMode, Tier};
use crate::profile::SessionResult;
use crate::scoring::ScoringPolicy;

/// Supplies the player's reply for each round.
pub trait AnswerSource {
    /// Read a reply to `expression`: one line for scalar questions, two rows
    /// for matrix questions. `Err` means input can no longer be read.
    fn answer(&mut self, expression: &Expression) -> QuizResult<Reply>;
}

/// Receives everything that happens during a session, for display only.
pub trait SessionObserver {
    fn notify(&mut self, event: &SessionEvent);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Started {
        mode: GameMode,
    },
    Question {
        round: u32,
        expression: Expression,
        score: i64,
    },
    Answered {
        outcome: Outcome,
        points: i64,
        expected: Answer,
        streak: u32,
    },
    Malformed {
        error: MalformedAnswer,
        fatal: bool,
    },
    LevelUp {
        streak: u32,
        next: Tier,
    },
    TimeUp {
        score: i64,
    },
    GameOver {
        score: i64,
        expected: Answer,
    },
    Finished(SessionResult),
}

/// Tunable session parameters.
#[derive(Debug, Clone)]
pub struct SessionRules {
    pub timed_duration: Duration,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            timed_duration: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Continue,
    LevelUp(Tier),
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MalformedAction {
    Reprompt,
    /// Ends the session, counting the reply as the incorrect answer.
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureAction {
    /// Drop the session without a result.
    Abandon,
    /// End the session, keeping what was scored.
    Finish,
    /// End the session, counting one incorrect answer.
    Terminate,
}

#[derive(Debug)]
struct StandardState {
    tier: Tier,
}

#[derive(Debug)]
struct TimedState {
    duration: Duration,
}

#[derive(Debug, Default)]
struct SurvivalState {
    streak: u32,
}

impl SurvivalState {
    fn level_index(streak: u32) -> usize {
        ((streak / 3) as usize).min(Tier::SURVIVAL_LADDER.len() - 1)
    }

    fn tier(&self) -> Tier {
        Tier::SURVIVAL_LADDER[Self::level_index(self.streak)]
    }

    fn on_answer(&mut self, outcome: Outcome) -> Transition {
        if outcome == Outcome::Incorrect {
            return Transition::GameOver;
        }
        let before = Self::level_index(self.streak);
        self.streak += 1;
        if self.streak % 3 == 0 && before < Tier::SURVIVAL_LADDER.len() - 1 {
            Transition::LevelUp(Tier::SURVIVAL_LADDER[before + 1])
        } else {
            Transition::Continue
        }
    }
}

#[derive(Debug)]
enum ModeState {
    Standard(StandardState),
    Timed(TimedState),
    Survival(SurvivalState),
}

impl ModeState {
    fn for_mode(mode: GameMode, rules: &SessionRules) -> Self {
        match (mode, mode.standard_tier()) {
            (_, Some(tier)) => Self::Standard(StandardState { tier }),
            (GameMode::Timed, None) => Self::Timed(TimedState {
                duration: rules.timed_duration,
            }),
            _ => Self::Survival(SurvivalState::default()),
        }
    }

    fn policy(&self) -> ScoringPolicy {
        match self {
            Self::Standard(_) => ScoringPolicy::Standard,
            Self::Timed(_) => ScoringPolicy::Timed,
            Self::Survival(_) => ScoringPolicy::Survival,
        }
    }

    fn honors_stop(&self) -> bool {
        matches!(self, Self::Standard(_))
    }

    fn streak(&self) -> u32 {
        match self {
            Self::Survival(s) => s.streak,
            _ => 0,
        }
    }

    /// The next question, or `None` when the session is over before it starts.
    fn next_round<R: Rng>(
        &mut self,
        generator: &mut ExpressionGenerator<R>,
        elapsed: Duration,
    ) -> Option<Expression> {
        match self {
            Self::Standard(s) => Some(generator.generate(s.tier)),
            Self::Timed(t) if elapsed >= t.duration => None,
            Self::Timed(_) => Some(generator.generate_from_pool(&Tier::TIMED_POOL).1),
            Self::Survival(s) => Some(generator.generate(s.tier())),
        }
    }

    fn on_answer(&mut self, outcome: Outcome) -> Transition {
        match self {
            Self::Standard(_) | Self::Timed(_) => Transition::Continue,
            Self::Survival(s) => s.on_answer(outcome),
        }
    }

    fn on_malformed(&self) -> MalformedAction {
        match self {
            Self::Standard(_) | Self::Timed(_) => MalformedAction::Reprompt,
            Self::Survival(_) => MalformedAction::Terminate,
        }
    }

    fn on_input_failure(&self) -> FailureAction {
        match self {
            Self::Standard(_) => FailureAction::Abandon,
            Self::Timed(_) => FailureAction::Finish,
            Self::Survival(_) => FailureAction::Terminate,
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    score: i64,
    correct: u32,
    incorrect: u32,
}

impl Tally {
    fn apply(&mut self, outcome: Outcome, points: i64) {
        self.score += points;
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.incorrect += 1,
        }
    }
}

/// Drives sessions against a generator and a clock.
pub struct SessionRunner<'a, R: Rng> {
    generator: &'a mut ExpressionGenerator<R>,
    clock: &'a dyn Clock,
    rules: SessionRules,
}

impl<'a, R: Rng> SessionRunner<'a, R> {
    pub fn new(generator: &'a mut ExpressionGenerator<R>, clock: &'a dyn Clock) -> Self {
        Self {
            generator,
            clock,
            rules: SessionRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: SessionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Play one session of `mode` to completion.
    ///
    /// Returns `Err` only when a Standard session is abandoned because the
    /// input source failed; nothing from that session should be recorded.
    pub fn run(
        &mut self,
        mode: GameMode,
        source: &mut dyn AnswerSource,
        observer: &mut dyn SessionObserver,
    ) -> QuizResult<SessionResult> {
        let mut state = ModeState::for_mode(mode, &self.rules);
        let mut tally = Tally::default();
        let start = self.clock.elapsed();
        let mut round = 0u32;

        debug!(%mode, "session started");
        observer.notify(&SessionEvent::Started { mode });

        'session: loop {
            let elapsed = self.clock.elapsed().saturating_sub(start);
            let Some(expression) = state.next_round(self.generator, elapsed) else {
                observer.notify(&SessionEvent::TimeUp { score: tally.score });
                break;
            };
            round += 1;
            debug!(round, tier = %expression.tier(), "round started");
            observer.notify(&SessionEvent::Question {
                round,
                expression: expression.clone(),
                score: tally.score,
            });
            let asked_at = self.clock.elapsed();

            loop {
                let reply = match source.answer(&expression) {
                    Ok(reply) => reply,
                    Err(err) => match state.on_input_failure() {
                        FailureAction::Abandon => {
                            debug!(%mode, error = %err, "session abandoned");
                            return Err(err);
                        }
                        FailureAction::Finish => {
                            debug!(%mode, error = %err, "input failed, ending session");
                            break 'session;
                        }
                        FailureAction::Terminate => {
                            tally.incorrect += 1;
                            observer.notify(&SessionEvent::GameOver {
                                score: tally.score,
                                expected: *expression.answer(),
                            });
                            break 'session;
                        }
                    },
                };

                if state.honors_stop() && reply.is_stop() {
                    debug!(%mode, round, "stop requested");
                    break 'session;
                }

                match expression.check(&reply) {
                    Ok(outcome) => {
                        let round_time = self.clock.elapsed().saturating_sub(asked_at);
                        let points = state.policy().delta(outcome, round_time);
                        tally.apply(outcome, points);
                        let transition = state.on_answer(outcome);
                        observer.notify(&SessionEvent::Answered {
                            outcome,
                            points,
                            expected: *expression.answer(),
                            streak: state.streak(),
                        });
                        match transition {
                            Transition::Continue => {}
                            Transition::LevelUp(next) => {
                                observer.notify(&SessionEvent::LevelUp {
                                    streak: state.streak(),
                                    next,
                                });
                            }
                            Transition::GameOver => {
                                observer.notify(&SessionEvent::GameOver {
                                    score: tally.score,
                                    expected: *expression.answer(),
                                });
                                break 'session;
                            }
                        }
                        break;
                    }
                    Err(error) => {
                        let action = state.on_malformed();
                        observer.notify(&SessionEvent::Malformed {
                            error,
                            fatal: action == MalformedAction::Terminate,
                        });
                        match action {
                            MalformedAction::Reprompt => {}
                            MalformedAction::Terminate => {
                                tally.incorrect += 1;
                                observer.notify(&SessionEvent::GameOver {
                                    score: tally.score,
                                    expected: *expression.answer(),
                                });
                                break 'session;
                            }
                        }
                    }
                }
            }
        }

        let result = SessionResult::new(mode, tally.score, tally.correct, tally.incorrect);
        debug!(
            %mode,
            score = result.score,
            correct = result.correct,
            incorrect = result.incorrect,
            "session finished"
        );
        observer.notify(&SessionEvent::Finished(result.clone()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::QuizError;
    use crate::profile::Profile;
    use crate::rank::Rank;

    #[derive(Clone, Default)]
    struct ManualClock(Rc<Cell<Duration>>);

    impl ManualClock {
        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn elapsed(&self) -> Duration {
            self.0.get()
        }
    }

    #[derive(Clone, Copy)]
    enum Step {
        Right,
        Wrong,
        Garbage,
        Stop,
    }

    /// Answers from a script, advancing the clock by each step's think time.
    /// An exhausted script behaves like closed stdin.
    struct Scripted {
        steps: VecDeque<(Duration, Step)>,
        clock: ManualClock,
    }

    impl Scripted {
        fn new(clock: &ManualClock, steps: &[Step]) -> Self {
            Self::timed(clock, &steps.iter().map(|s| (0, *s)).collect::<Vec<_>>())
        }

        fn timed(clock: &ManualClock, steps: &[(u64, Step)]) -> Self {
            Self {
                steps: steps
                    .iter()
                    .map(|(secs, s)| (Duration::from_secs(*secs), *s))
                    .collect(),
                clock: clock.clone(),
            }
        }
    }

    fn render(answer: &Answer, nudge: i64) -> Reply {
        match answer {
            Answer::Scalar(v) => Reply::Line((v + nudge as f64).to_string()),
            Answer::Matrix(m) => Reply::Rows([
                format!("{} {}", m[0][0] + nudge, m[0][1]),
                format!("{} {}", m[1][0], m[1][1]),
            ]),
        }
    }

    impl AnswerSource for Scripted {
        fn answer(&mut self, expression: &Expression) -> QuizResult<Reply> {
            let (wait, step) = self.steps.pop_front().ok_or(QuizError::InputClosed)?;
            self.clock.advance(wait);
            let reply = match step {
                Step::Right => render(expression.answer(), 0),
                Step::Wrong => render(expression.answer(), 1),
                Step::Garbage if expression.is_matrix() => {
                    Reply::Rows(["1 2 3".into(), "4".into()])
                }
                Step::Garbage => Reply::Line("twelve".into()),
                Step::Stop if expression.is_matrix() => Reply::Rows(["exit".into(), "".into()]),
                Step::Stop => Reply::Line("exit".into()),
            };
            Ok(reply)
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<SessionEvent>);

    impl SessionObserver for Recorder {
        fn notify(&mut self, event: &SessionEvent) {
            self.0.push(event.clone());
        }
    }

    impl Recorder {
        fn question_tiers(&self) -> Vec<Tier> {
            self.0
                .iter()
                .filter_map(|e| match e {
                    SessionEvent::Question { expression, .. } => Some(expression.tier()),
                    _ => None,
                })
                .collect()
        }

        fn level_ups(&self) -> Vec<Tier> {
            self.0
                .iter()
                .filter_map(|e| match e {
                    SessionEvent::LevelUp { next, .. } => Some(*next),
                    _ => None,
                })
                .collect()
        }

        fn has(&self, pred: impl Fn(&SessionEvent) -> bool) -> bool {
            self.0.iter().any(pred)
        }
    }

    fn generator() -> ExpressionGenerator<StdRng> {
        ExpressionGenerator::new(StdRng::seed_from_u64(42))
    }

    fn play(
        mode: GameMode,
        clock: &ManualClock,
        source: &mut Scripted,
        rules: SessionRules,
    ) -> (QuizResult<SessionResult>, Recorder) {
        let mut gen = generator();
        let mut recorder = Recorder::default();
        let result = SessionRunner::new(&mut gen, clock)
            .with_rules(rules)
            .run(mode, source, &mut recorder);
        (result, recorder)
    }

    // === Standard ===

    #[test]
    fn test_standard_score_formula() {
        use Step::*;
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Right, Wrong, Right, Wrong, Wrong, Right, Stop]);
        let (result, _) = play(GameMode::Medium, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!(result.correct, 3);
        assert_eq!(result.incorrect, 3);
        assert_eq!(result.score, 10 * 3 - 5 * 3);
    }

    #[test]
    fn test_fresh_profile_easy_scenario() {
        use Step::*;
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Right, Right, Wrong, Right, Stop]);
        let (result, _) = play(GameMode::Easy, &clock, &mut src, SessionRules::default());

        let mut profile = Profile::new("ada");
        profile.record(result.unwrap());
        assert_eq!(profile.total_score, 25);
        assert_eq!(profile.rank, Rank::Beginner);
        assert_eq!(profile.stats.total_correct, 3);
        assert_eq!(profile.stats.total_incorrect, 1);
        assert_eq!(profile.stats.easy_played, 1);
        assert_eq!(profile.history.len(), 1);
    }

    #[test]
    fn test_standard_malformed_reprompts_same_round() {
        use Step::*;
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Garbage, Garbage, Right, Stop]);
        let (result, rec) = play(GameMode::Hard, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!(result.score, 10);
        assert_eq!(result.correct, 1);
        assert_eq!(result.incorrect, 0);
        // One question for the answered round, one for the round that was stopped.
        assert_eq!(rec.question_tiers().len(), 2);
        assert!(rec.has(|e| matches!(e, SessionEvent::Malformed { fatal: false, .. })));
    }

    #[test]
    fn test_standard_matrix_session() {
        use Step::*;
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Right, Garbage, Wrong, Right, Stop]);
        let (result, rec) = play(GameMode::Matrix, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!(result.score, 15);
        assert_eq!((result.correct, result.incorrect), (2, 1));
        assert!(rec.question_tiers().iter().all(|t| *t == Tier::Matrix));
    }

    #[test]
    fn test_standard_stop_immediately() {
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Step::Stop]);
        let (result, rec) = play(GameMode::Extreme, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!((result.score, result.correct, result.incorrect), (0, 0, 0));
        assert!(rec.has(|e| matches!(e, SessionEvent::Finished(_))));
    }

    #[test]
    fn test_standard_input_failure_abandons() {
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Step::Right]);
        let (result, rec) = play(GameMode::Easy, &clock, &mut src, SessionRules::default());
        assert!(matches!(result, Err(QuizError::InputClosed)));
        assert!(!rec.has(|e| matches!(e, SessionEvent::Finished(_))));
    }

    // === Timed ===

    #[test]
    fn test_timed_ends_after_duration() {
        let clock = ManualClock::default();
        let steps: Vec<(u64, Step)> = (0..20).map(|_| (5, Step::Right)).collect();
        let mut src = Scripted::timed(&clock, &steps);
        let (result, rec) = play(GameMode::Timed, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        // Rounds start at 0s, 5s, ... 55s; the check at 60s ends the session.
        assert_eq!(result.correct, 12);
        assert_eq!(result.score, 12 * 10);
        assert!(rec.has(|e| matches!(e, SessionEvent::TimeUp { .. })));
        assert!(rec.question_tiers().iter().all(|t| *t != Tier::Matrix));
    }

    #[test]
    fn test_timed_round_in_progress_finishes() {
        let clock = ManualClock::default();
        let mut src = Scripted::timed(&clock, &[(75, Step::Right), (1, Step::Right)]);
        let (result, _) = play(GameMode::Timed, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!(result.correct, 1);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_timed_points_follow_round_time() {
        let clock = ManualClock::default();
        let rules = SessionRules {
            timed_duration: Duration::from_secs(10),
        };
        let mut src = Scripted::timed(
            &clock,
            &[(2, Step::Garbage), (2, Step::Right), (7, Step::Wrong)],
        );
        let (result, rec) = play(GameMode::Timed, &clock, &mut src, rules);
        let result = result.unwrap();
        // 4s on the first round (re-prompt included) earns 11; the miss costs 5.
        assert_eq!(result.score, 11 - 5);
        assert_eq!((result.correct, result.incorrect), (1, 1));
        assert_eq!(rec.question_tiers().len(), 2);
    }

    #[test]
    fn test_timed_ignores_stop_sentinel() {
        let clock = ManualClock::default();
        let mut src = Scripted::timed(&clock, &[(1, Step::Stop), (1, Step::Right)]);
        let (result, rec) = play(GameMode::Timed, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!(result.correct, 1);
        assert_eq!(result.score, 13);
        assert!(rec.has(|e| matches!(e, SessionEvent::Malformed { fatal: false, .. })));
    }

    #[test]
    fn test_timed_input_failure_keeps_score() {
        let clock = ManualClock::default();
        let mut src = Scripted::timed(&clock, &[(1, Step::Right), (3, Step::Wrong)]);
        let (result, _) = play(GameMode::Timed, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!(result.score, 14 - 5);
        assert_eq!((result.correct, result.incorrect), (1, 1));
    }

    #[test]
    fn test_timed_malformed_after_deadline_reprompts() {
        let clock = ManualClock::default();
        let rules = SessionRules {
            timed_duration: Duration::from_secs(5),
        };
        let mut src = Scripted::timed(&clock, &[(6, Step::Garbage), (1, Step::Right)]);
        let (result, rec) = play(GameMode::Timed, &clock, &mut src, rules);
        let result = result.unwrap();
        // The typo lands past the deadline but the round still finishes: 7s earns 8.
        assert_eq!((result.score, result.correct, result.incorrect), (8, 1, 0));
        assert_eq!(rec.question_tiers().len(), 1);
        assert!(rec.has(|e| matches!(e, SessionEvent::Malformed { fatal: false, .. })));
        assert!(rec.has(|e| matches!(e, SessionEvent::TimeUp { .. })));
    }

    #[test]
    fn test_malformed_actions_per_mode() {
        let rules = SessionRules::default();
        for mode in [GameMode::Easy, GameMode::Matrix, GameMode::Timed] {
            let state = ModeState::for_mode(mode, &rules);
            assert_eq!(state.on_malformed(), MalformedAction::Reprompt);
        }
        let survival = ModeState::for_mode(GameMode::Survival, &rules);
        assert_eq!(survival.on_malformed(), MalformedAction::Terminate);
    }

    // === Survival ===

    #[test]
    fn test_survival_seven_then_fail() {
        let clock = ManualClock::default();
        let mut steps = vec![Step::Right; 7];
        steps.push(Step::Wrong);
        let mut src = Scripted::new(&clock, &steps);
        let (result, rec) = play(GameMode::Survival, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!(result.score, 7);
        assert_eq!(result.correct, 7);
        assert_eq!(result.incorrect, 1);

        let tiers = rec.question_tiers();
        assert_eq!(tiers.len(), 8);
        assert_eq!(*tiers.last().unwrap(), Tier::Hard);
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(rec.level_ups(), vec![Tier::Medium, Tier::Hard]);
        assert!(rec.has(|e| matches!(e, SessionEvent::GameOver { score: 7, .. })));
    }

    #[test]
    fn test_survival_level_ups_stop_at_extreme() {
        let clock = ManualClock::default();
        let mut steps = vec![Step::Right; 13];
        steps.push(Step::Wrong);
        let mut src = Scripted::new(&clock, &steps);
        let (result, rec) = play(GameMode::Survival, &clock, &mut src, SessionRules::default());
        assert_eq!(result.unwrap().score, 13);
        assert_eq!(
            rec.level_ups(),
            vec![Tier::Medium, Tier::Hard, Tier::Extreme]
        );
        assert_eq!(*rec.question_tiers().last().unwrap(), Tier::Extreme);
    }

    #[test]
    fn test_survival_malformed_ends_run() {
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Step::Right, Step::Garbage, Step::Right]);
        let (result, rec) = play(GameMode::Survival, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!((result.score, result.correct, result.incorrect), (1, 1, 1));
        assert!(rec.has(|e| matches!(e, SessionEvent::Malformed { fatal: true, .. })));
        assert!(rec.has(|e| matches!(e, SessionEvent::GameOver { .. })));
    }

    #[test]
    fn test_survival_stop_word_is_malformed() {
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Step::Stop]);
        let (result, _) = play(GameMode::Survival, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!((result.score, result.incorrect), (0, 1));
    }

    #[test]
    fn test_survival_input_failure_counts_incorrect() {
        let clock = ManualClock::default();
        let mut src = Scripted::new(&clock, &[Step::Right, Step::Right]);
        let (result, _) = play(GameMode::Survival, &clock, &mut src, SessionRules::default());
        let result = result.unwrap();
        assert_eq!((result.score, result.correct, result.incorrect), (2, 2, 1));
    }

    #[test]
    fn test_survival_state_transitions() {
        let mut s = SurvivalState::default();
        let mut ups = Vec::new();
        for _ in 0..12 {
            if let Transition::LevelUp(t) = s.on_answer(Outcome::Correct) {
                ups.push((s.streak, t));
            }
        }
        assert_eq!(
            ups,
            vec![(3, Tier::Medium), (6, Tier::Hard), (9, Tier::Extreme)]
        );
        assert_eq!(s.tier(), Tier::Extreme);
        assert_eq!(s.on_answer(Outcome::Incorrect), Transition::GameOver);
    }
}
