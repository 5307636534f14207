//! Shared parameter-count validation used by every gate's `construct`.

use crate::{
    error::{EngineError, EngineResult},
    math::{N, R},
};

pub fn expect_len(label: &'static str, params: &[R], expected: N) -> EngineResult<()> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(EngineError::BadParameterCount {
            label: label.to_string(),
            expected,
            got: params.len(),
        })
    }
}

pub fn expect_empty(label: &'static str, params: &[R]) -> EngineResult<()> {
    expect_len(label, params, 0)
}
