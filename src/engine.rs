use thiserror::Error;

use crate::{
    context::Context,
    percent::HexPolicy,
    process::{DynamicProcess, Process},
    profile::ProfileError,
    transform::{Transform, TransformError},
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// The engine facade: a context plus a runtime-assembled transform chain.
pub struct Bytenorm {
    ctx: Context,
    pipeline: DynamicProcess,
}

impl Bytenorm {
    pub fn builder() -> BytenormBuilder {
        BytenormBuilder::default()
    }

    pub fn run<'a>(&self, input: impl Into<Cow<'a, [u8]>>) -> Result<Cow<'a, [u8]>, EngineError> {
        Ok(self.pipeline.process(input.into(), &self.ctx)?)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }
}

#[derive(Default)]
pub struct BytenormBuilder {
    hex_policy: HexPolicy,
    pipeline: DynamicProcess,
}

impl BytenormBuilder {
    pub fn hex_policy(mut self, policy: HexPolicy) -> Self {
        self.hex_policy = policy;
        self
    }

    pub fn add_transform<T: Transform + Send + Sync + 'static>(mut self, transform: T) -> Self {
        self.pipeline = self.pipeline.push(transform);
        self
    }

    pub fn build(self) -> Bytenorm {
        Bytenorm {
            ctx: Context::new(self.hex_policy),
            pipeline: self.pipeline,
        }
    }
}
