//! Brreg API response types
//!
//! Reference: https://data.brreg.no/enhetsregisteret/api/docs/index.html
//!
//! Only the fields the application reads are typed. Everything else is kept
//! in the flattened `other` maps so the pass-through returns the upstream
//! document unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Code + description pair used throughout the API
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Kode {
    pub kode: String,
    pub beskrivelse: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Adresse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postnummer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poststed: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A registered unit (`/enheter/{orgnr}`)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enhet {
    pub organisasjonsnummer: String,
    pub navn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisasjonsform: Option<Kode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hjemmeside: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postadresse: Option<Adresse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forretningsadresse: Option<Adresse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naeringskode1: Option<Kode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antall_ansatte: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiftelsesdato: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PersonNavn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fornavn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mellomnavn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etternavn: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RollePerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navn: Option<PersonNavn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fodselsdato: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A unit holding a role (e.g. an auditing firm)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RolleEnhet {
    pub organisasjonsnummer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisasjonsform: Option<Kode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navn: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rolle {
    #[serde(rename = "type")]
    pub rolle_type: Kode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<RollePerson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhet: Option<RolleEnhet>,
    /// Resigned from the role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fratradt: Option<bool>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Rolle {
    pub fn is_resigned(&self) -> bool {
        self.fratradt == Some(true)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rollegruppe {
    #[serde(rename = "type")]
    pub gruppe_type: Kode,
    #[serde(default)]
    pub roller: Vec<Rolle>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Roles document (`/enheter/{orgnr}/roller`)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RollerResponse {
    #[serde(default)]
    pub rollegrupper: Vec<Rollegruppe>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Search page (`/enheter?navn=...`). `_embedded` is absent when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct EnhetSearchPage {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedEnheter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddedEnheter {
    #[serde(default)]
    pub enheter: Vec<Enhet>,
}

impl EnhetSearchPage {
    pub fn into_enheter(self) -> Vec<Enhet> {
        self.embedded.map(|e| e.enheter).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enhet_keeps_unknown_fields() {
        let raw = json!({
            "organisasjonsnummer": "886581432",
            "navn": "AKER ASA",
            "organisasjonsform": {
                "kode": "ASA",
                "beskrivelse": "Allmennaksjeselskap",
                "_links": { "self": { "href": "https://data.brreg.no/enhetsregisteret/api/organisasjonsformer/ASA" } }
            },
            "postadresse": { "adresse": [], "postnummer": "0283", "poststed": "OSLO", "kommune": "OSLO" },
            "antallAnsatte": 27,
            "registrertIMvaregisteret": true,
            "_links": { "self": { "href": "https://data.brreg.no/enhetsregisteret/api/enheter/886581432" } }
        });

        let enhet: Enhet = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(enhet.antall_ansatte, Some(27));
        assert_eq!(enhet.organisasjonsform.as_ref().map(|f| f.kode.as_str()), Some("ASA"));
        assert_eq!(enhet.other.get("registrertIMvaregisteret"), Some(&json!(true)));
        assert_eq!(enhet.postadresse.as_ref().and_then(|a| a.adresse.as_ref()), Some(&vec![]));

        assert_eq!(serde_json::to_value(&enhet).unwrap(), raw);
    }

    #[test]
    fn test_search_page_without_embedded() {
        let page: EnhetSearchPage =
            serde_json::from_value(json!({ "page": { "totalElements": 0 } })).unwrap();
        assert!(page.into_enheter().is_empty());
    }

    #[test]
    fn test_roller_parses_resigned_flag() {
        let roller: RollerResponse = serde_json::from_value(json!({
            "rollegrupper": [{
                "type": { "kode": "STYR", "beskrivelse": "Styre" },
                "roller": [
                    { "type": { "kode": "LEDE", "beskrivelse": "Styrets leder" },
                      "person": { "navn": { "fornavn": "Kari", "etternavn": "Nordmann" } } },
                    { "type": { "kode": "MEDL", "beskrivelse": "Styremedlem" },
                      "person": { "navn": { "fornavn": "Ola", "etternavn": "Nordmann" } },
                      "fratradt": true }
                ]
            }]
        }))
        .unwrap();

        let roller = &roller.rollegrupper[0].roller;
        assert!(!roller[0].is_resigned());
        assert!(roller[1].is_resigned());
    }

    #[test]
    fn test_roller_round_trips_unchanged() {
        let raw = json!({
            "rollegrupper": [{
                "type": {
                    "kode": "STYR",
                    "beskrivelse": "Styre",
                    "_links": { "rolletype": { "href": "https://data.brreg.no/enhetsregisteret/api/rollegruppetyper/STYR" } }
                },
                "sistEndret": "2024-05-02",
                "roller": [
                    {
                        "type": {
                            "kode": "LEDE",
                            "beskrivelse": "Styrets leder",
                            "_links": { "rolletype": { "href": "https://data.brreg.no/enhetsregisteret/api/rolletyper/LEDE" } }
                        },
                        "person": {
                            "fodselsdato": "1970-01-01",
                            "navn": { "fornavn": "Kari", "etternavn": "Nordmann" },
                            "erDoed": false
                        },
                        "avregistrert": false,
                        "rekkefolge": 0
                    },
                    {
                        "type": { "kode": "REVI", "beskrivelse": "Revisor" },
                        "enhet": { "organisasjonsnummer": "987654321", "navn": [], "erSlettet": false },
                        "fratradt": false
                    }
                ]
            }]
        });

        let roller: RollerResponse = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(roller.rollegrupper[0].roller[0].fratradt, None);
        assert_eq!(serde_json::to_value(&roller).unwrap(), raw);
    }
}
