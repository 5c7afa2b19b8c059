use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines the stats used for damage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    /// Damage driven by attack against defense.
    #[string = "physical"]
    Physical,
    /// Damage driven by special attack against special defense.
    #[string = "special"]
    Special,
    /// No direct damage.
    #[string = "status"]
    Status,
}

#[cfg(test)]
mod move_category_test {
    use crate::{
        MoveCategory,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(MoveCategory::Physical, "physical");
        test_string_serialization(MoveCategory::Special, "special");
        test_string_serialization(MoveCategory::Status, "status");
    }

    #[test]
    fn deserializes_capitalized() {
        test_string_deserialization("Physical", MoveCategory::Physical);
        test_string_deserialization("SPECIAL", MoveCategory::Special);
    }
}
