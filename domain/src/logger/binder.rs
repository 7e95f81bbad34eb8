//! Method binder
//!
//! Copies the six severity methods of a logger handle onto a [`LogTarget`].

use super::attributes::LogTarget;
use super::handle::LoggerHandle;
use super::method::LogMethod;
use super::severity::Severity;
use crate::core::error::DomainError;

/// Bind the severity methods of `logger` onto `target` under their own names.
///
/// Existing methods of the same name are overwritten. The bound methods are
/// the handle's own callables at the time of the call; attaching a different
/// handle later does not update them unless this function runs again.
///
/// A handle missing any of the six methods is a configuration error: the
/// lookup failure is returned and `target` is left unchanged.
pub fn bind_methods<T>(target: &mut T, logger: &dyn LoggerHandle) -> Result<(), DomainError>
where
    T: LogTarget + ?Sized,
{
    let methods = Severity::ALL
        .into_iter()
        .map(|severity| {
            logger
                .method(severity)
                .ok_or_else(|| DomainError::attribute_resolution(logger.name(), severity.as_str()))
        })
        .collect::<Result<Vec<LogMethod>, DomainError>>()?;

    let attributes = target.log_attributes_mut();
    for method in methods {
        attributes.set_method(method);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::args::LogArgs;
    use crate::logger::attributes::LogAttributes;
    use crate::logger::severity::METHOD_NAMES;
    use crate::logger::testing::FakeLogger;

    #[derive(Default)]
    struct Empty {
        attributes: LogAttributes,
    }

    impl LogTarget for Empty {
        fn log_attributes(&self) -> &LogAttributes {
            &self.attributes
        }

        fn log_attributes_mut(&mut self) -> &mut LogAttributes {
            &mut self.attributes
        }
    }

    #[test]
    fn test_bind_methods_copies_identical_callables() {
        let logger = FakeLogger::new("root");
        let mut obj = Empty::default();
        for name in METHOD_NAMES {
            assert!(!obj.has_attr(name));
        }

        bind_methods(&mut obj, &logger).unwrap();

        for severity in Severity::ALL {
            let bound = obj.log_attributes().method(severity).unwrap();
            assert_eq!(bound.name(), severity.as_str());
            assert!(bound.same_as(&logger.method(severity).unwrap()));
        }
    }

    #[test]
    fn test_bound_methods_log_through_handle() {
        let logger = FakeLogger::new("Empty");
        let mut obj = Empty::default();
        bind_methods(&mut obj, &logger).unwrap();

        obj.info("Hello", &LogArgs::NONE).unwrap();
        obj.exception("failed: {}", &LogArgs::new().arg("timeout")).unwrap();

        assert_eq!(
            logger.lines(),
            vec!["Empty info Hello", "Empty exception failed: timeout"]
        );
    }

    #[test]
    fn test_rebinding_overwrites_previous_methods() {
        let first = FakeLogger::new("first");
        let second = FakeLogger::new("second");
        let mut obj = Empty::default();

        bind_methods(&mut obj, &first).unwrap();
        bind_methods(&mut obj, &second).unwrap();
        obj.warning("switched", &LogArgs::NONE).unwrap();

        assert!(first.lines().is_empty());
        assert_eq!(second.lines(), vec!["second warning switched"]);
    }

    #[test]
    fn test_missing_method_fails_without_partial_binding() {
        let logger = FakeLogger::without("partial", &[Severity::Critical]);
        let mut obj = Empty::default();

        let err = bind_methods(&mut obj, &logger).unwrap_err();

        assert_eq!(err, DomainError::attribute_resolution("partial", "critical"));
        for name in METHOD_NAMES {
            assert!(!obj.has_attr(name));
        }
    }

    #[test]
    fn test_bind_onto_bare_attributes() {
        let logger = FakeLogger::new("bare");
        let mut attrs = LogAttributes::new();
        bind_methods(&mut attrs, &logger).unwrap();
        assert_eq!(attrs.attr_names(), METHOD_NAMES.to_vec());
    }
}
