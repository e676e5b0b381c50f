//! Natural language replies for a matched species.
//!
//! Replies are driven by [`PHRASINGS`], a table from (category, attribute) to a sentence
//! template. Attributes without an entry use the generic "The {attribute} for {name} is ..."
//! form. Record fields are read by name from the record's JSON form, so an attribute that
//! the record's category doesn't have is reported as unknown rather than failing.

use serde_json::{Map, Value};

use crate::{
    model::species::{Category, SpeciesDto},
    server::service::search::attribute::Attribute,
};

type Template = fn(name: &str, value: &str) -> String;

/// How a requested attribute is turned into a sentence.
#[derive(Clone, Copy)]
pub enum Phrasing {
    /// Reads the attribute's own field and fills in a template
    Single(Template),
    /// Combines the temperature and pH fields
    Habitat,
}

/// Bespoke phrasing per category and attribute.
pub static PHRASINGS: [(Category, Attribute, Phrasing); 11] = [
    (Category::Fish, Attribute::Habitat, Phrasing::Habitat),
    (
        Category::Fish,
        Attribute::Compatibility,
        Phrasing::Single(|name, value| format!("{} are {}.", name, value)),
    ),
    (
        Category::Fish,
        Attribute::MinTankSizeGal,
        Phrasing::Single(|name, value| {
            format!("The minimum tank size for {} is {} gallons.", name, value)
        }),
    ),
    (
        Category::Fish,
        Attribute::PlantNeeds,
        Phrasing::Single(|name, value| format!("For {}, {} are recommended.", name, value)),
    ),
    (
        Category::Fish,
        Attribute::FilterRecommendation,
        Phrasing::Single(|name, value| {
            format!("For {}, {} is usually recommended.", name, value)
        }),
    ),
    (
        Category::Fish,
        Attribute::Diet,
        Phrasing::Single(|name, value| format!("{} are {}.", name, value)),
    ),
    (
        Category::Plant,
        Attribute::Co2Needed,
        Phrasing::Single(|name, value| format!("For {}, CO2 is {}.", name, value)),
    ),
    (
        Category::Plant,
        Attribute::CareLevel,
        Phrasing::Single(|name, value| format!("The care level for {} is {}.", name, value)),
    ),
    (
        Category::Plant,
        Attribute::Lighting,
        Phrasing::Single(|name, value| format!("Regarding lighting for {}: {}.", name, value)),
    ),
    (
        Category::Plant,
        Attribute::Placement,
        Phrasing::Single(|name, value| {
            format!("The recommended placement for {} is {}.", name, value)
        }),
    ),
    (
        Category::Plant,
        Attribute::GrowthRate,
        Phrasing::Single(|name, value| format!("The growth rate for {} is {}.", name, value)),
    ),
];

fn generic(attribute: Attribute) -> impl Fn(&str, &str) -> String {
    move |name, value| format!("The {} for {} is {}.", attribute.label(), name, value)
}

/// Looks up the bespoke phrasing for an attribute of a category, if there is one.
pub fn phrasing_for(category: Category, attribute: Attribute) -> Option<Phrasing> {
    PHRASINGS
        .iter()
        .find(|(c, a, _)| *c == category && *a == attribute)
        .map(|(_, _, phrasing)| *phrasing)
}

/// Builds the reply for a matched record.
///
/// Without an attribute the reply is the record's description. With one, the reply
/// describes that attribute, or explains that it isn't available.
pub fn describe(record: &SpeciesDto, attribute: Option<Attribute>) -> String {
    let name = record.name();

    let Some(attribute) = attribute else {
        return format!("{}: {}", name, record.description().unwrap_or_default());
    };

    describe_fields(record, attribute, fields_of(record))
}

/// Phrases `attribute` from the record's fields, as read by [`fields_of`].
fn describe_fields(
    record: &SpeciesDto,
    attribute: Attribute,
    fields: Result<Map<String, Value>, serde_json::Error>,
) -> String {
    let name = record.name();

    let fields = match fields {
        Ok(fields) => fields,
        Err(e) => {
            tracing::error!(
                name = %name,
                attribute = %attribute,
                "Unexpected error reading species fields: {}",
                e
            );

            return format!(
                "An internal error occurred while fetching details for {}.",
                name
            );
        }
    };

    match phrasing_for(record.category(), attribute) {
        Some(Phrasing::Habitat) => describe_habitat(name, &fields),
        Some(Phrasing::Single(template)) => describe_field(name, attribute, &fields, template),
        None => describe_field(name, attribute, &fields, generic(attribute)),
    }
}

fn describe_field<F>(name: &str, attribute: Attribute, fields: &Map<String, Value>, template: F) -> String
where
    F: Fn(&str, &str) -> String,
{
    match fields.get(attribute.key()) {
        None => format!(
            "I don't have specific information about '{}' for {}.",
            attribute.label(),
            name
        ),
        Some(value) => match value_text(value) {
            Some(text) => template(name, &text),
            None => format!(
                "I don't have specific information about the {} for {}.",
                attribute.label(),
                name
            ),
        },
    }
}

fn describe_habitat(name: &str, fields: &Map<String, Value>) -> String {
    let temperature = fields.get("habitat_temp").and_then(value_text);
    let ph = fields.get("habitat_ph").and_then(value_text);

    match (temperature, ph) {
        (Some(temperature), Some(ph)) => format!(
            "{} prefer temperatures of {} and a pH of {}.",
            name, temperature, ph
        ),
        _ => format!("I don't have specific habitat information for {}.", name),
    }
}

fn fields_of(record: &SpeciesDto) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        other => Err(serde::de::Error::custom(format!(
            "expected species record to serialize as an object, got {}",
            other
        ))),
    }
}

/// Display text of a field value; `None` for null or blank values.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
