//! Name-based mapping from internal to external enumerations.
//!
//! Internal and external enums are versioned independently. A value crosses over
//! only if the external enum has a variant with the same name; anything else is a
//! [`ViewError::UnmappedEnum`].

use serde::de::{
    DeserializeOwned, IntoDeserializer,
    value::{Error as ValueError, StrDeserializer},
};

use crate::error::ViewError;
use crate::models::NamedEnum;

/// Convert `value` into the external enum variant of the same name
pub fn convert_to<E>(value: impl NamedEnum) -> Result<E, ViewError>
where
    E: DeserializeOwned,
{
    convert_named(value)
}

fn convert_named<I, E>(value: I) -> Result<E, ViewError>
where
    I: NamedEnum,
    E: DeserializeOwned,
{
    let name: &'static str = value.as_str();
    let deserializer: StrDeserializer<'_, ValueError> = name.into_deserializer();
    E::deserialize(deserializer).map_err(|_| ViewError::UnmappedEnum {
        enum_name: I::TYPE_NAME,
        value: name,
    })
}

/// Like [`convert_to`] for optional values; absence stays absence
pub fn convert_optional<I, E>(value: Option<I>) -> Result<Option<E>, ViewError>
where
    I: NamedEnum,
    E: DeserializeOwned,
{
    value.map(convert_named).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;
    use crate::views;
    use std::collections::HashSet;

    #[test]
    fn job_status_maps_every_value_distinctly() {
        let mapped: Vec<views::JobStatus> = models::JobStatus::ALL
            .iter()
            .map(|status| convert_to(*status).unwrap())
            .collect();

        let distinct: HashSet<_> = mapped.iter().collect();
        assert_eq!(distinct.len(), models::JobStatus::ALL.len());
        assert_eq!(
            convert_to::<views::JobStatus>(models::JobStatus::Cancelled).unwrap(),
            views::JobStatus::Cancelled
        );
    }

    #[test]
    fn config_type_maps_every_value_distinctly() {
        let mapped: HashSet<views::JobConfigType> = models::ConfigType::ALL
            .iter()
            .map(|config_type| convert_to(*config_type).unwrap())
            .collect();

        assert_eq!(mapped.len(), models::ConfigType::ALL.len());
        assert_eq!(
            convert_to::<views::JobConfigType>(models::ConfigType::ResetConnection).unwrap(),
            views::JobConfigType::ResetConnection
        );
    }

    #[test]
    fn failure_enums_map_every_value_distinctly() {
        let origins: HashSet<views::FailureOrigin> = models::FailureOrigin::ALL
            .iter()
            .map(|origin| convert_to(*origin).unwrap())
            .collect();
        assert_eq!(origins.len(), models::FailureOrigin::ALL.len());

        let types: HashSet<views::FailureType> = models::FailureType::ALL
            .iter()
            .map(|failure_type| convert_to(*failure_type).unwrap())
            .collect();
        assert_eq!(types.len(), models::FailureType::ALL.len());

        assert_eq!(
            convert_to::<views::FailureOrigin>(models::FailureOrigin::AirbytePlatform).unwrap(),
            views::FailureOrigin::AirbytePlatform
        );
    }

    #[test]
    fn attempt_status_without_counterpart_fails_closed() {
        for status in [
            models::AttemptStatus::Running,
            models::AttemptStatus::Failed,
            models::AttemptStatus::Succeeded,
        ] {
            assert!(convert_to::<views::AttemptStatus>(status).is_ok());
        }

        let err = convert_to::<views::AttemptStatus>(models::AttemptStatus::NotStarted)
            .unwrap_err();
        match err {
            ViewError::UnmappedEnum { enum_name, value } => {
                assert_eq!(enum_name, "AttemptStatus");
                assert_eq!(value, "not_started");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn optional_conversion_preserves_absence() {
        let absent: Option<views::FailureType> =
            convert_optional::<models::FailureType, _>(None).unwrap();
        assert_eq!(absent, None);

        let present: Option<views::FailureType> =
            convert_optional(Some(models::FailureType::HeartbeatTimeout)).unwrap();
        assert_eq!(present, Some(views::FailureType::HeartbeatTimeout));
    }
}
