//! Shared utility functions.

/// Unqualified name of `T`, without module path or generic arguments.
///
/// `my_app::jobs::Worker<my_app::Config>` becomes `Worker`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    strip_type_path(std::any::type_name::<T>())
}

fn strip_type_path(full: &str) -> &str {
    let base = match full.find('<') {
        Some(pos) => &full[..pos],
        None => full,
    };
    base.rsplit("::").next().unwrap_or(base)
}
