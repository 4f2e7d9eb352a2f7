pub mod preset;

use crate::{
    context::Context,
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    transform::Transform,
};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile `{0}` failed: {1}")]
    Failed(&'static str, String),
}

/// A named, pre-assembled transform chain.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn run<'a>(
        &self,
        input: Cow<'a, [u8]>,
        ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, ProfileError> {
        self.pipeline
            .process(input, ctx)
            .map_err(|e| ProfileError::Failed(self.name, e.to_string()))
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self { name, current: EmptyProcess }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_transform<T: Transform + 'static>(self, transform: T) -> ProfileBuilder<ChainedProcess<T, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess { transform, previous: self.current },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile { name: self.name, pipeline: self.current }
    }
}

impl Profile<DynamicProcess> {
    pub fn plugin_builder(name: &'static str) -> DynProfileBuilder {
        DynProfileBuilder { name, pipeline: DynamicProcess::new() }
    }
}

pub struct DynProfileBuilder {
    name: &'static str,
    pipeline: DynamicProcess,
}

impl DynProfileBuilder {
    pub fn add_transform<T: Transform + Send + Sync + 'static>(self, transform: T) -> Self {
        Self { pipeline: self.pipeline.push(transform), ..self }
    }

    pub fn build(self) -> Profile<DynamicProcess> {
        Profile { name: self.name, pipeline: self.pipeline }
    }
}
