//! Transform pipeline infrastructure
//!
//! A small composable transformation system. Stages implement [`Runnable`],
//! and a [`Transform`] chains them with `.then()`; the compiler checks that
//! each stage's input matches the previous stage's output.
//!
//! ```rust,ignore
//! let clean = Transform::identity()
//!     .then(StripComments)
//!     .then(CollapseBlankLines);
//! let text = clean.run(source);
//! ```
//!
//! Every stage here is total: cleaning and highlighting cannot fail, so `run`
//! returns its output directly rather than a `Result`.
//!
//! # Module Organization
//!
//! - [`stages`]: individual stages (stripping, collapsing)
//! - [`standard`]: pre-built transforms for the common paths

pub mod stages;
pub mod standard;

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> O;

    /// Stage name, used in logs
    fn name(&self) -> &'static str {
        "anonymous"
    }
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` represents a transformation from type `I` to type `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> O + Send + Sync>,
    stages: Vec<&'static str>,
}

impl<T: 'static> Transform<T, T> {
    /// Create a transform that passes input through unchanged
    pub fn identity() -> Self {
        Transform {
            run_fn: Box::new(|input| input),
            stages: Vec::new(),
        }
    }
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
            stages: Vec::new(),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        let mut stages = self.stages;
        let name = stage.name();
        stages.push(name);
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input);
                tracing::trace!(stage = name, "running stage");
                stage.run(intermediate)
            }),
            stages,
        }
    }

    /// Names of the stages chained so far, in order
    pub fn stage_names(&self) -> &[&'static str] {
        &self.stages
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> O {
        (self.run_fn)(input)
    }
}

// Transforms can themselves be used as stages
impl<I, O> Runnable<I, O> for Transform<I, O> {
    fn run(&self, input: I) -> O {
        Transform::run(self, input)
    }

    fn name(&self) -> &'static str {
        "transform"
    }
}
