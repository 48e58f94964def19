/// A type that records the steps taken by an algorithm, such as the rewrites applied by
/// [`simplify_with_steps`](crate::simplify::simplify_with_steps).
///
/// Implemented for the unit type `()`, which discards every step, and for [`Vec`], which keeps
/// them in the order they were taken.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
