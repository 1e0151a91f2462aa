use std::time::Instant;

use tracing::info;

/// Run `f` once and log how long it took, in whole seconds.
pub fn timed<R>(description: &str, f: impl FnOnce() -> R) -> R {
    let start = Instant::now();
    let ret = f();
    let elapsed = start.elapsed().as_secs();
    info!(">>>>>>>>> {} : {} seconds", description, elapsed);
    ret
}

/// Wrap `f` so every call is timed and logged under `description`.
///
/// The wrapped function's result, including any `Err`, is returned
/// untouched. Functions taking several arguments take them as a tuple.
pub fn time_this<A, R, F>(description: impl Into<String>, f: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
{
    let description = description.into();
    move |args| timed(&description, || f(args))
}
