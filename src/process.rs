//! Process abstraction.
//! `ChainedProcess` is monomorphised – the compiler knows the concrete type
//! of every transform and can inline the whole chain. `DynamicProcess` is the
//! runtime-assembled fallback used by the engine builder.

use crate::{
    context::Context,
    transform::{Transform, TransformError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

pub trait Process {
    fn process<'a>(
        &self,
        input: Cow<'a, [u8]>,
        ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline]
    fn process<'a>(
        &self,
        input: Cow<'a, [u8]>,
        _ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        Ok(input)
    }
}

pub struct ChainedProcess<T: Transform, P: Process> {
    pub transform: T,
    pub previous: P,
}

impl<T: Transform, P: Process> Process for ChainedProcess<T, P> {
    #[inline]
    fn process<'a>(
        &self,
        input: Cow<'a, [u8]>,
        ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        let current = self.previous.process(input, ctx)?;
        if !self.transform.needs_apply(&current, ctx)? {
            return Ok(current);
        }
        self.transform.apply(current, ctx)
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) transforms: SmallVec<[Arc<dyn Transform + Send + Sync>; 8]>,
}

impl DynamicProcess {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push<T: Transform + Send + Sync + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Arc::new(transform));
        self
    }
}

impl Process for DynamicProcess {
    #[inline]
    fn process<'a>(
        &self,
        mut input: Cow<'a, [u8]>,
        ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        for transform in &self.transforms {
            if !transform.needs_apply(&input, ctx)? {
                continue;
            }
            input = transform.apply(input, ctx)?;
        }
        Ok(input)
    }
}
