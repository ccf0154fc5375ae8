use serde::{Deserialize, Serialize};

/// Width of the logical layout space concepts are positioned in.
pub const LOGICAL_WIDTH: f64 = 800.0;
/// Height of the logical layout space concepts are positioned in.
pub const LOGICAL_HEIGHT: f64 = 600.0;

/// Fill used for levels outside the palette.
pub const FALLBACK_COLOR: &str = "#94A3B8";

const LEVEL_COLORS: [&str; 5] = ["#6366F1", "#EC4899", "#F59E0B", "#10B981", "#3B82F6"];
const LEVEL_NAMES: [&str; 5] = [
	"Potentiality",
	"Unity",
	"Duality",
	"Connection",
	"Manifestation",
];

/// One of the five abstraction levels, stored as the raw integer the
/// analysis returned. Out-of-range values are kept as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub i64);

impl Level {
	/// Every in-range level, lowest first.
	pub fn all() -> impl Iterator<Item = Level> {
		(0..LEVEL_COLORS.len() as i64).map(Level)
	}

	fn index(self) -> Option<usize> {
		usize::try_from(self.0)
			.ok()
			.filter(|&i| i < LEVEL_COLORS.len())
	}

	pub fn color(self) -> &'static str {
		self.index()
			.map(|i| LEVEL_COLORS[i])
			.unwrap_or(FALLBACK_COLOR)
	}

	pub fn name(self) -> Option<&'static str> {
		self.index().map(|i| LEVEL_NAMES[i])
	}
}

/// Directed, labeled edge to another concept of the same result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
	pub target_id: String,
	pub relationship: String,
}

/// Entry of the details panel's "related concepts" list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelatedConcept {
	pub id: String,
	pub name: String,
	pub relationship: String,
}

/// A node of the concept map. `x`/`y` live in the logical 800x600 space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
	pub id: String,
	pub name: String,
	pub level: Level,
	pub x: f64,
	pub y: f64,
	#[serde(default)]
	pub connections: Vec<Connection>,
	#[serde(default)]
	pub level_name: Option<String>,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub reasoning: String,
	#[serde(default, rename = "relatedConcepts")]
	pub related: Vec<RelatedConcept>,
}

impl Concept {
	/// Bare concept with no edges or details text.
	pub fn new(id: impl Into<String>, name: impl Into<String>, level: i64, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			level: Level(level),
			x,
			y,
			connections: Vec::new(),
			level_name: None,
			description: String::new(),
			reasoning: String::new(),
			related: Vec::new(),
		}
	}

	pub fn connect(mut self, target_id: impl Into<String>, relationship: impl Into<String>) -> Self {
		self.connections.push(Connection {
			target_id: target_id.into(),
			relationship: relationship.into(),
		});
		self
	}

	/// Level label, preferring the one the analysis supplied.
	pub fn level_label(&self) -> String {
		self.level_name
			.clone()
			.filter(|n| !n.trim().is_empty())
			.or_else(|| self.level.name().map(str::to_owned))
			.unwrap_or_else(|| format!("Level {}", self.level.0))
	}
}

/// Immutable snapshot of one analysis result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
	concepts: Vec<Concept>,
}

impl GraphModel {
	pub fn new(concepts: Vec<Concept>) -> Self {
		Self { concepts }
	}

	pub fn concepts(&self) -> &[Concept] {
		&self.concepts
	}

	pub fn len(&self) -> usize {
		self.concepts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.concepts.is_empty()
	}

	/// First concept with the given id.
	pub fn find(&self, id: &str) -> Option<&Concept> {
		self.concepts.iter().find(|c| c.id == id)
	}

	/// Every `(source, connection, target)` whose target resolves. Dangling
	/// targets are skipped.
	pub fn edges(&self) -> impl Iterator<Item = (&Concept, &Connection, &Concept)> {
		self.concepts.iter().flat_map(move |source| {
			source
				.connections
				.iter()
				.filter_map(move |conn| self.find(&conn.target_id).map(|t| (source, conn, t)))
		})
	}
}

impl From<Vec<Concept>> for GraphModel {
	fn from(concepts: Vec<Concept>) -> Self {
		Self::new(concepts)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_covers_levels_and_falls_back() {
		assert_eq!(Level(0).color(), "#6366F1");
		assert_eq!(Level(4).color(), "#3B82F6");
		assert_eq!(Level(5).color(), FALLBACK_COLOR);
		assert_eq!(Level(-1).color(), FALLBACK_COLOR);
		assert_eq!(Level::all().count(), 5);
	}

	#[test]
	fn dangling_edges_are_skipped() {
		let model = GraphModel::new(vec![
			Concept::new("a", "A", 0, 0.0, 0.0)
				.connect("b", "feeds")
				.connect("ghost", "haunts"),
			Concept::new("b", "B", 1, 10.0, 10.0),
		]);
		let edges: Vec<_> = model
			.edges()
			.map(|(s, c, t)| (s.id.as_str(), c.relationship.as_str(), t.id.as_str()))
			.collect();
		assert_eq!(edges, vec![("a", "feeds", "b")]);
	}

	#[test]
	fn level_label_prefers_supplied_name() {
		let mut concept = Concept::new("a", "A", 2, 0.0, 0.0);
		assert_eq!(concept.level_label(), "Duality");
		concept.level_name = Some("Dualidad".into());
		assert_eq!(concept.level_label(), "Dualidad");
		assert_eq!(Concept::new("b", "B", 9, 0.0, 0.0).level_label(), "Level 9");
	}

	#[test]
	fn deserializes_camel_case_payload() {
		let concept: Concept = serde_json::from_str(
			r#"{"id":"c1","name":"Mind","level":1,"x":10,"y":20,
			"connections":[{"targetId":"c2","relationship":"shapes"}],
			"relatedConcepts":[{"id":"c2","name":"Matter","relationship":"shapes"}]}"#,
		)
		.unwrap();
		assert_eq!(concept.level, Level(1));
		assert_eq!(concept.connections[0].target_id, "c2");
		assert_eq!(concept.related[0].name, "Matter");
	}
}
