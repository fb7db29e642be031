//! Composite formatting of record fields
//!
//! Every formatter is a pure function of the record and never fails: fields
//! that are absent (or empty) are skipped together with their separator.

use super::{AddressLabels, EidRecord};
use crate::field::FieldId;

/// Substitution placeholder in caller supplied label templates
pub const PLACEHOLDER: &str = "%s";

/// Raw state code that gets a display name in the residence address
pub const SERBIA_CODE: &str = "SRB";

/// Display name used for [`SERBIA_CODE`]
pub const SERBIA_DISPLAY: &str = "REPUBLIKA SRBIJA";

/// Use the template only if it contains a placeholder, otherwise a bare one
fn sanitize_template(template: Option<&str>) -> &str {
    match template {
        Some(template) if template.contains(PLACEHOLDER) => template,
        _ => PLACEHOLDER,
    }
}

/// Substitute the first placeholder with the value
fn apply_template(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}

impl EidRecord {
    /// Append the field value with a separator prefix, if present
    fn append_to(&self, out: &mut String, separator: &str, field: FieldId) {
        if let Some(value) = self.present(field) {
            out.push_str(separator);
            out.push_str(value);
        }
    }

    /// Append the field value rendered through a template, if present
    fn append_formatted(&self, out: &mut String, separator: &str, template: &str, field: FieldId) {
        if let Some(value) = self.present(field) {
            out.push_str(separator);
            out.push_str(&apply_template(template, value));
        }
    }

    fn present(&self, field: FieldId) -> Option<&str> {
        self.get(field).filter(|value| !value.is_empty())
    }

    /// Given name, parent given name and surname as a single string
    ///
    /// The three slots are always emitted, so missing parts leave their
    /// separating spaces behind: a record with only a surname gives `"  Surname"`.
    pub fn name_full(&self) -> String {
        format!(
            "{} {} {}",
            self.given_name().unwrap_or_default(),
            self.parent_given_name().unwrap_or_default(),
            self.surname().unwrap_or_default()
        )
    }

    /// Place of residence as a multi-line string
    ///
    /// Each template should contain one `%s` placeholder for the value, e.g.
    /// `"ulaz %s"`, `"%s. sprat"` and `"br. %s"` give
    /// `"Main street 11A ulaz 2, 5. sprat, br. 4"`. A missing template, or one
    /// without a placeholder, renders the raw value.
    ///
    /// Without an entrance or floor the apartment number is appended in the
    /// short form `"Main street 11A/4"`.
    pub fn place_full(
        &self,
        entrance_format: Option<&str>,
        floor_format: Option<&str>,
        apartment_format: Option<&str>,
    ) -> String {
        let entrance_format = sanitize_template(entrance_format);
        let floor_format = sanitize_template(floor_format);
        let apartment_format = sanitize_template(apartment_format);

        let mut out = String::new();

        // Main street, Main street 11, Main street 11A
        self.append_to(&mut out, "", FieldId::Street);
        // The space follows a street even without a house number, and leads
        // a house number without a street
        if self.has(FieldId::Street) || self.has(FieldId::HouseNumber) {
            out.push(' ');
        }
        self.append_to(&mut out, "", FieldId::HouseNumber);
        self.append_to(&mut out, "", FieldId::HouseLetter);

        self.append_formatted(&mut out, " ", entrance_format, FieldId::Entrance);
        self.append_formatted(&mut out, ", ", floor_format, FieldId::Floor);

        if self.has(FieldId::Entrance) || self.has(FieldId::Floor) {
            self.append_formatted(&mut out, ", ", apartment_format, FieldId::ApartmentNumber);
        } else {
            self.append_to(&mut out, "/", FieldId::ApartmentNumber);
        }

        self.append_to(&mut out, "\n", FieldId::Place);
        self.append_to(&mut out, ", ", FieldId::Community);

        out.push('\n');
        match self.state().unwrap_or_default() {
            SERBIA_CODE => out.push_str(SERBIA_DISPLAY),
            state => out.push_str(state),
        }

        out
    }

    /// [`EidRecord::place_full`] with templates taken from [`AddressLabels`]
    pub fn place_full_with(&self, labels: &AddressLabels) -> String {
        self.place_full(
            Some(labels.entrance.as_str()),
            Some(labels.floor.as_str()),
            Some(labels.apartment.as_str()),
        )
    }

    /// Place of birth with community and state, if present
    pub fn place_of_birth_full(&self) -> String {
        let mut out = String::new();
        self.append_to(&mut out, "", FieldId::PlaceOfBirth);
        self.append_to(&mut out, ", ", FieldId::CommunityOfBirth);
        self.append_to(&mut out, "\n", FieldId::StateOfBirth);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EidRecordBuilder;

    fn record(values: &[(FieldId, &str)]) -> EidRecord {
        let mut builder = EidRecordBuilder::new();
        for (field, value) in values {
            builder.add_value(*field, *value).unwrap();
        }
        builder.build()
    }

    const STREET: [(FieldId, &str); 3] = [
        (FieldId::Street, "Main street"),
        (FieldId::HouseNumber, "11"),
        (FieldId::HouseLetter, "A"),
    ];

    #[test]
    fn test_sanitize_template() {
        assert_eq!(sanitize_template(None), "%s");
        assert_eq!(sanitize_template(Some("")), "%s");
        assert_eq!(sanitize_template(Some("sprat")), "%s");
        assert_eq!(sanitize_template(Some("%s. sprat")), "%s. sprat");
        assert_eq!(apply_template("%s. sprat", "5"), "5. sprat");
    }

    #[test]
    fn test_name_full() {
        let full = record(&[
            (FieldId::GivenName, "Petar"),
            (FieldId::ParentGivenName, "Marko"),
            (FieldId::Surname, "Petrović"),
        ]);
        assert_eq!(full.name_full(), "Petar Marko Petrović");

        let surname_only = record(&[(FieldId::Surname, "Petrović")]);
        assert_eq!(surname_only.name_full(), "  Petrović");

        let no_parent = record(&[(FieldId::GivenName, "Petar"), (FieldId::Surname, "Petrović")]);
        assert_eq!(no_parent.name_full(), "Petar  Petrović");
    }

    #[test]
    fn test_place_full_short_form() {
        let mut values = STREET.to_vec();
        values.push((FieldId::ApartmentNumber, "4"));
        let record = record(&values);
        assert_eq!(
            record.place_full(Some("ulaz %s"), Some("%s. sprat"), Some("br. %s")),
            "Main street 11A/4\n"
        );
    }

    #[test]
    fn test_place_full_long_form() {
        let mut values = STREET.to_vec();
        values.extend([
            (FieldId::Entrance, "2"),
            (FieldId::Floor, "5"),
            (FieldId::ApartmentNumber, "4"),
            (FieldId::Place, "Beograd"),
            (FieldId::Community, "Savski Venac"),
            (FieldId::State, "SRB"),
        ]);
        let record = record(&values);
        assert_eq!(
            record.place_full(Some("ulaz %s"), Some("%s. sprat"), Some("br. %s")),
            "Main street 11A ulaz 2, 5. sprat, br. 4\nBeograd, Savski Venac\nREPUBLIKA SRBIJA"
        );
    }

    #[test]
    fn test_place_full_floor_only_uses_long_form() {
        let mut values = STREET.to_vec();
        values.extend([(FieldId::Floor, "5"), (FieldId::ApartmentNumber, "4")]);
        let record = record(&values);
        assert_eq!(
            record.place_full(Some("ulaz %s"), Some("%s. sprat"), Some("br. %s")),
            "Main street 11A, 5. sprat, br. 4\n"
        );
    }

    #[test]
    fn test_place_full_sanitizes_each_template() {
        let mut values = STREET.to_vec();
        values.extend([
            (FieldId::Entrance, "2"),
            (FieldId::Floor, "5"),
            (FieldId::ApartmentNumber, "4"),
        ]);
        let record = record(&values);
        assert_eq!(
            record.place_full(Some("ulaz %s"), Some(""), Some("br. %s")),
            "Main street 11A ulaz 2, 5, br. 4\n"
        );
        assert_eq!(
            record.place_full(None, Some("%s. sprat"), Some("apartment")),
            "Main street 11A 2, 5. sprat, 4\n"
        );
    }

    #[test]
    fn test_place_full_state() {
        let serbia = record(&[(FieldId::Place, "Beograd"), (FieldId::State, "SRB")]);
        assert_eq!(serbia.place_full(None, None, None), "\nBeograd\nREPUBLIKA SRBIJA");

        let montenegro = record(&[(FieldId::Place, "Podgorica"), (FieldId::State, "MNE")]);
        assert_eq!(montenegro.place_full(None, None, None), "\nPodgorica\nMNE");

        let lowercase = record(&[(FieldId::State, "srb")]);
        assert_eq!(lowercase.place_full(None, None, None), "\nsrb");
    }

    #[test]
    fn test_place_full_empty_values_skipped() {
        let mut values = STREET.to_vec();
        values.extend([
            (FieldId::Entrance, ""),
            (FieldId::Floor, ""),
            (FieldId::ApartmentNumber, "4"),
            (FieldId::Community, ""),
        ]);
        let record = record(&values);
        assert_eq!(
            record.place_full(Some("ulaz %s"), Some("%s. sprat"), Some("br. %s")),
            "Main street 11A/4\n"
        );
    }

    #[test]
    fn test_place_full_street_without_number() {
        let record = record(&[(FieldId::Street, "Main street"), (FieldId::Place, "Beograd")]);
        assert_eq!(record.place_full(None, None, None), "Main street \nBeograd\n");
    }

    #[test]
    fn test_place_full_house_number_without_street() {
        let number_only = record(&[(FieldId::HouseNumber, "11")]);
        assert_eq!(number_only.place_full(None, None, None), " 11\n");

        let with_letter = record(&[
            (FieldId::HouseNumber, "11"),
            (FieldId::HouseLetter, "A"),
            (FieldId::ApartmentNumber, "4"),
        ]);
        assert_eq!(with_letter.place_full(None, None, None), " 11A/4\n");
    }

    #[test]
    fn test_place_full_with_labels() {
        let mut values = STREET.to_vec();
        values.extend([
            (FieldId::Entrance, "2"),
            (FieldId::Floor, "5"),
            (FieldId::ApartmentNumber, "4"),
        ]);
        let record = record(&values);
        assert_eq!(
            record.place_full_with(&AddressLabels::default()),
            "Main street 11A ulaz 2, 5. sprat, br. 4\n"
        );
        assert_eq!(
            record.place_full_with(&AddressLabels::plain()),
            "Main street 11A 2, 5, 4\n"
        );
    }

    #[test]
    fn test_place_of_birth_full() {
        let full = record(&[
            (FieldId::PlaceOfBirth, "Beograd"),
            (FieldId::CommunityOfBirth, "Savski Venac"),
            (FieldId::StateOfBirth, "Srbija"),
        ]);
        assert_eq!(full.place_of_birth_full(), "Beograd, Savski Venac\nSrbija");

        let no_community = record(&[
            (FieldId::PlaceOfBirth, "Beograd"),
            (FieldId::StateOfBirth, "Srbija"),
        ]);
        assert_eq!(no_community.place_of_birth_full(), "Beograd\nSrbija");

        let place_only = record(&[(FieldId::PlaceOfBirth, "Beograd")]);
        assert_eq!(place_only.place_of_birth_full(), "Beograd");
    }

    #[test]
    fn test_empty_record_formatting() {
        let record = EidRecordBuilder::new().build();
        assert_eq!(record.name_full(), "  ");
        assert_eq!(record.place_full(None, None, None), "\n");
        assert_eq!(record.place_full(Some("ulaz %s"), Some(""), None), "\n");
        assert_eq!(record.place_of_birth_full(), "");
        assert_eq!(record.to_string(), "");
    }
}
