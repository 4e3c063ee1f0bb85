//! Structural parsing of one tracking source into a `TrackingRecord`.
//!
//! Shape checks only: values are never judged for truthfulness. The wire
//! shapes are derived with serde; `serde_path_to_error` reports the dotted
//! path of the offending field, and every failure names its source.

use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

use super::record::{
    ConsciousnessState, CycleCompletion, EnvironmentalScan, EvolutionLevel, FocusArea,
    HistoryEntry, IntegrationStrategy, ProfessionalGuidance, Protocol, TrackingRecord, Trend,
    ZoneConceptFramework,
};
use crate::domain::foundation::ReportError;

/// Parses every domain found in one source.
///
/// # Errors
///
/// Returns `ReportError::DataFormat` if the root or any present domain has
/// the wrong shape.
pub fn parse_tracking_source(source: &str, root: &Value) -> Result<TrackingRecord, ReportError> {
    let wire: Object<WireRoot> = serde_path_to_error::deserialize(root).map_err(|e| {
        let path = match e.path().to_string() {
            p if p == "." => "<root>".to_string(),
            p => p,
        };
        ReportError::data_format(source, path, e.inner().to_string())
    })?;
    Ok(wire.0.into())
}

// ───────────────────────────────────────────────────────────────
// Wire helpers
// ───────────────────────────────────────────────────────────────

/// A value that must be a JSON object.
///
/// Derived structs also accept sequences; this wrapper does not.
struct Object<T>(T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ObjectVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
            type Value = Object<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Object<T>, A::Error> {
                T::deserialize(MapAccessDeserializer::new(map)).map(Object)
            }
        }

        deserializer.deserialize_map(ObjectVisitor(PhantomData))
    }
}

/// Lists treat explicit `null` like an absent field.
fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Named protocols in declared order.
struct NamedProtocols(Vec<Protocol>);

impl<'de> Deserialize<'de> for NamedProtocols {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProtocolsVisitor;

        impl<'de> Visitor<'de> for ProtocolsVisitor {
            type Value = NamedProtocols;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of named protocols")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<NamedProtocols, A::Error> {
                let mut protocols = Vec::new();
                while let Some((name, Object(wire))) =
                    map.next_entry::<String, Object<WireProtocol>>()?
                {
                    protocols.push(wire.named(name));
                }
                Ok(NamedProtocols(protocols))
            }
        }

        deserializer.deserialize_map(ProtocolsVisitor)
    }
}

// ───────────────────────────────────────────────────────────────
// Wire shapes
// ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRoot {
    zone_concept_framework: Option<Object<WireZoneConcept>>,
    consciousness_state: Option<Object<WireConsciousness>>,
    organizational_consciousness: Option<Object<WireConsciousness>>,
    professional_guidance: Option<Object<WireGuidance>>,
    environmental_scan: Option<Object<WireScan>>,
    integration_strategy: Option<Object<WireIntegration>>,
    cycle_completion: Option<Object<WireCycle>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireZoneConcept {
    version: Option<String>,
    protocols: Option<NamedProtocols>,
    core_elements: Option<NamedProtocols>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireProtocol {
    relevance: Option<f64>,
    focus: Option<String>,
    #[serde(default, deserialize_with = "list")]
    insights: Vec<String>,
    #[serde(default, deserialize_with = "list")]
    key_technologies: Vec<String>,
}

impl WireProtocol {
    fn named(self, name: String) -> Protocol {
        Protocol {
            name,
            relevance: self.relevance,
            focus: self.focus,
            insights: self.insights,
            key_technologies: self.key_technologies,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireConsciousness {
    current_state: Option<String>,
    evolution_level: Option<EvolutionLevel>,
    #[serde(default, deserialize_with = "list")]
    history: Vec<WireHistoryEntry>,
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "a string or an object with a 'state'")]
enum WireHistoryEntry {
    State(String),
    Detailed(Object<WireHistoryDetail>),
}

#[derive(Deserialize)]
struct WireHistoryDetail {
    period: Option<String>,
    state: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGuidance {
    #[serde(default, deserialize_with = "list")]
    focus_areas: Vec<WireFocusArea>,
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "a string or an object with a 'title'")]
enum WireFocusArea {
    Title(String),
    Detailed(Object<WireFocusDetail>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireFocusDetail {
    title: String,
    #[serde(default, deserialize_with = "list")]
    actionable_insights: Vec<String>,
}

#[derive(Deserialize)]
struct WireScan {
    #[serde(default, deserialize_with = "list")]
    trends: Vec<WireTrend>,
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "a string or an object with a 'name'")]
enum WireTrend {
    Name(String),
    Detailed(Object<WireTrendDetail>),
}

#[derive(Deserialize)]
struct WireTrendDetail {
    name: String,
    description: Option<String>,
    impact: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireIntegration {
    #[serde(default, deserialize_with = "list")]
    immediate_actions: Vec<String>,
    #[serde(default, deserialize_with = "list")]
    long_term_plan: Vec<String>,
}

#[derive(Deserialize)]
struct WireCycle {
    status: Option<String>,
    #[serde(default, deserialize_with = "list")]
    insights: Vec<String>,
}

// ───────────────────────────────────────────────────────────────
// Wire to domain
// ───────────────────────────────────────────────────────────────

impl From<WireRoot> for TrackingRecord {
    fn from(wire: WireRoot) -> Self {
        // `consciousnessState` wins over its older alias.
        let consciousness = wire
            .consciousness_state
            .or(wire.organizational_consciousness);

        TrackingRecord {
            zone_concept_framework: wire.zone_concept_framework.map(|Object(z)| z.into()),
            consciousness_state: consciousness.map(|Object(c)| c.into()),
            professional_guidance: wire.professional_guidance.map(|Object(g)| g.into()),
            environmental_scan: wire.environmental_scan.map(|Object(s)| s.into()),
            integration_strategy: wire.integration_strategy.map(|Object(i)| i.into()),
            cycle_completion: wire.cycle_completion.map(|Object(c)| c.into()),
        }
    }
}

impl From<WireZoneConcept> for ZoneConceptFramework {
    fn from(wire: WireZoneConcept) -> Self {
        ZoneConceptFramework {
            version: wire.version,
            protocols: wire
                .protocols
                .or(wire.core_elements)
                .map(|NamedProtocols(p)| p)
                .unwrap_or_default(),
        }
    }
}

impl From<WireConsciousness> for ConsciousnessState {
    fn from(wire: WireConsciousness) -> Self {
        ConsciousnessState {
            current_state: wire.current_state,
            evolution_level: wire.evolution_level,
            history: wire
                .history
                .into_iter()
                .map(|entry| match entry {
                    WireHistoryEntry::State(state) => HistoryEntry { period: None, state },
                    WireHistoryEntry::Detailed(Object(d)) => HistoryEntry {
                        period: d.period,
                        state: d.state,
                    },
                })
                .collect(),
        }
    }
}

impl From<WireGuidance> for ProfessionalGuidance {
    fn from(wire: WireGuidance) -> Self {
        ProfessionalGuidance {
            focus_areas: wire
                .focus_areas
                .into_iter()
                .map(|area| match area {
                    WireFocusArea::Title(title) => FocusArea {
                        title,
                        actionable_insights: Vec::new(),
                    },
                    WireFocusArea::Detailed(Object(d)) => FocusArea {
                        title: d.title,
                        actionable_insights: d.actionable_insights,
                    },
                })
                .collect(),
        }
    }
}

impl From<WireScan> for EnvironmentalScan {
    fn from(wire: WireScan) -> Self {
        EnvironmentalScan {
            trends: wire
                .trends
                .into_iter()
                .map(|trend| match trend {
                    WireTrend::Name(name) => Trend {
                        name,
                        ..Default::default()
                    },
                    WireTrend::Detailed(Object(d)) => Trend {
                        name: d.name,
                        description: d.description,
                        impact: d.impact,
                    },
                })
                .collect(),
        }
    }
}

impl From<WireIntegration> for IntegrationStrategy {
    fn from(wire: WireIntegration) -> Self {
        IntegrationStrategy {
            immediate_actions: wire.immediate_actions,
            long_term_plan: wire.long_term_plan,
        }
    }
}

impl From<WireCycle> for CycleCompletion {
    fn from(wire: WireCycle) -> Self {
        CycleCompletion {
            status: wire.status,
            insights: wire.insights,
        }
    }
}
