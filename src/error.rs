/// Errors raised while configuring an [`Evaluator`](crate::Evaluator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The depth limit was set to zero.
    #[error("Zero value not allowed for the depth limit")]
    ZeroValue,

    /// The depth limit was set above [`MAX_DEPTH_CEILING`](crate::MAX_DEPTH_CEILING).
    #[error("Depth limit {0} is above the ceiling of {ceiling}", ceiling = crate::MAX_DEPTH_CEILING)]
    DepthTooLarge(usize),

    /// A strictness name other than `lenient` or `strict`.
    #[error("Invalid strictness: {0:?}, expected \"lenient\" or \"strict\"")]
    InvalidStrictness(String),
}
