use crate::{
    iterator::Iterator,
    util::{Result, Status},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepState {
    /// The next pulled element is emitted
    Emit,
    /// Discard `remaining` more elements before emitting again
    Skipping { remaining: usize },
}

/// Emits upstream positions 0, stride, 2 * stride, ...
pub struct Step<I> {
    iter: I,
    stride: usize,
    state: StepState,
}

impl<I: Iterator> Step<I> {
    pub fn new(iter: I, stride: usize) -> Result<Self> {
        if stride == 0 {
            return Err(Status::invalid_argument("step stride must be at least 1"));
        }
        Ok(Step {
            iter,
            stride,
            state: StepState::Emit,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    fn after(&self, state: StepState) -> StepState {
        match state {
            StepState::Emit if self.stride > 1 => StepState::Skipping {
                remaining: self.stride - 1,
            },
            StepState::Skipping { remaining } if remaining > 1 => StepState::Skipping {
                remaining: remaining - 1,
            },
            _ => StepState::Emit,
        }
    }
}

impl<I: Iterator> Iterator for Step<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let value = self.iter.next()?;
            let current = self.state;
            self.state = self.after(current);
            if current == StepState::Emit {
                return Some(value);
            }
        }
    }
}
