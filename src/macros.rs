//! Caller-identity capture for the request surface.
//!
//! `template_request!()` is the zero-argument form: file path, enclosing
//! function name, and line number are filled in by the macro, so call sites
//! never spell out their own identity. The three-argument form exists as the
//! deliberate escape hatch for reading another method's template; the
//! call-site validator checks those arguments against ground truth.

/// Name of the enclosing function at the expansion site.
///
/// Resolves the full path of a local item via `type_name` and keeps the last
/// segment. Inside a closure the captured name is the closure's enclosing
/// function followed by `{{closure}}`.
#[doc(hidden)]
#[macro_export]
macro_rules! __enclosing_fn {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let full = type_name_of(__here);
        let full = &full[..full.len() - "::__here".len()];
        match full.rfind("::") {
            Some(idx) => &full[idx + 2..],
            None => full,
        }
    }};
}

/// Build a [`TemplateRequest`](crate::domain::resolver::TemplateRequest)
/// carrying the caller's identity.
///
/// With no arguments the identity is captured automatically. The explicit
/// triple points at a different declaration site on purpose; anything in
/// between is flagged by the build-time validator.
#[macro_export]
macro_rules! template_request {
    () => {
        $crate::domain::resolver::TemplateRequest::new(
            file!(),
            $crate::__enclosing_fn!(),
            line!(),
        )
    };
    ($file:expr, $method:expr, $line:expr) => {
        $crate::domain::resolver::TemplateRequest::new($file, $method, $line)
    };
}
