use crate::error::*;

pub type FrameResult<T> = Result<T, FrameError>;
