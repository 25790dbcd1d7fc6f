pub mod clock;
pub mod error;
pub mod expression;
pub mod mode;
pub mod profile;
pub mod rank;
pub mod scoring;
pub mod session;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::{MalformedAnswer, QuizError, QuizResult};
pub use expression::{
    Answer, Expression, ExpressionGenerator, MatrixOp, Matrix2, Outcome, Question, Reply,
    STOP_SENTINEL,
};
pub use mode::{GameMode, Tier};
pub use profile::{Profile, SessionResult, Stats};
pub use rank::Rank;
pub use scoring::ScoringPolicy;
pub use session::{AnswerSource, SessionEvent, SessionObserver, SessionRules, SessionRunner};
pub use store::ProfileStore;
