//! Core trait for priority rules.

/// A scoring rule that assigns a priority value to an item.
///
/// Rules return integer scores where **lower is higher priority**, matching
/// the integral time unit of the instance. A rule that prefers larger
/// quantities negates them.
///
/// # Type Parameters
///
/// * `T` - The item type being scored
/// * `C` - The context type providing state information
///
/// # Examples
///
/// ```
/// use u_openshop::dispatching::PriorityRule;
///
/// struct ShortestFirst;
///
/// impl PriorityRule<u64, ()> for ShortestFirst {
///     fn name(&self) -> &str { "SPT" }
///     fn score(&self, duration: &u64, _ctx: &()) -> i64 {
///         *duration as i64
///     }
/// }
///
/// assert_eq!(ShortestFirst.score(&7, &()), 7);
/// ```
pub trait PriorityRule<T, C>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given item.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, item: &T, context: &C) -> i64;
}
