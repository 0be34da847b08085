//! Helpers over the roles document

use super::types::{RollePerson, RollerResponse};
use serde::Serialize;

/// Placeholder when a role holder has no registered name
const UNKNOWN_PERSON: &str = "Ukjent";

/// A current role holder, as shown in the entity panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardMember {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

/// "Fornavn Mellomnavn Etternavn", skipping missing parts.
pub fn format_person_name(person: Option<&RollePerson>) -> String {
    let Some(navn) = person.and_then(|p| p.navn.as_ref()) else {
        return UNKNOWN_PERSON.to_string();
    };

    [&navn.fornavn, &navn.mellomnavn, &navn.etternavn]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every person currently holding a role, across all role groups.
/// Resigned holders and roles held by units rather than people are skipped.
pub fn extract_board_members(roller: &RollerResponse) -> Vec<BoardMember> {
    roller
        .rollegrupper
        .iter()
        .flat_map(|gruppe| gruppe.roller.iter())
        .filter(|rolle| !rolle.is_resigned())
        .filter_map(|rolle| {
            let person = rolle.person.as_ref()?;
            Some(BoardMember {
                name: format_person_name(Some(person)),
                role: rolle.rolle_type.beskrivelse.clone(),
                birth_date: person.fodselsdato.clone(),
            })
        })
        .collect()
}
