use super::types::{Concept, GraphModel, LOGICAL_HEIGHT, LOGICAL_WIDTH};

pub const NODE_RADIUS: f64 = 35.0;
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.1;
/// Padding between the canvas and its container, per axis.
pub const CONTAINER_PADDING: f64 = 16.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}

	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

/// Pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceSize {
	pub width: f64,
	pub height: f64,
}

impl DeviceSize {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Canvas size for a container of the given client size.
	pub fn for_container(client_width: f64, client_height: f64) -> Self {
		Self {
			width: (client_width - CONTAINER_PADDING).max(0.0),
			height: (client_height - CONTAINER_PADDING).max(0.0),
		}
	}

	/// Stretches a logical position onto this surface.
	pub fn to_device(self, x: f64, y: f64) -> Point {
		Point::new(
			x / LOGICAL_WIDTH * self.width,
			y / LOGICAL_HEIGHT * self.height,
		)
	}

	pub fn concept_position(self, concept: &Concept) -> Point {
		self.to_device(concept.x, concept.y)
	}
}

impl Default for DeviceSize {
	fn default() -> Self {
		Self::new(LOGICAL_WIDTH, LOGICAL_HEIGHT)
	}
}

/// Pan and zoom applied on top of device coordinates: translate by
/// `offset`, then scale by `scale` around the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
	pub scale: f64,
	pub offset: Point,
	pub show_effects: bool,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			scale: 1.0,
			offset: Point::default(),
			show_effects: false,
		}
	}
}

impl ViewState {
	pub fn zoom_in(&mut self) {
		self.scale = (self.scale + ZOOM_STEP).min(MAX_SCALE);
	}

	pub fn zoom_out(&mut self) {
		self.scale = (self.scale - ZOOM_STEP).max(MIN_SCALE);
	}

	/// Back to unit scale and no offset. The effects toggle is untouched.
	pub fn reset(&mut self) {
		self.scale = 1.0;
		self.offset = Point::default();
	}

	pub fn toggle_effects(&mut self) {
		self.show_effects = !self.show_effects;
	}

	/// Zoom as a whole percentage, for the on-canvas badge.
	pub fn zoom_percent(&self) -> i64 {
		(self.scale * 100.0).round() as i64
	}

	/// Maps a device position through the view transform.
	pub fn apply(&self, p: Point) -> Point {
		Point::new(
			p.x * self.scale + self.offset.x,
			p.y * self.scale + self.offset.y,
		)
	}

	/// Inverse of [`ViewState::apply`], for pointer positions.
	pub fn unapply(&self, p: Point) -> Point {
		Point::new(
			(p.x - self.offset.x) / self.scale,
			(p.y - self.offset.y) / self.scale,
		)
	}
}

/// Id of the first concept (in model order) whose node contains the pointer.
pub fn hit_test<'a>(
	model: &'a GraphModel,
	view: &ViewState,
	size: DeviceSize,
	pointer: Point,
) -> Option<&'a str> {
	let p = view.unapply(pointer);
	model
		.concepts()
		.iter()
		.find(|c| size.concept_position(c).distance(p) <= NODE_RADIUS)
		.map(|c| c.id.as_str())
}

/// Decides when a click that ends a pointer gesture is swallowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClickPolicy {
	/// Any primary press starts a drag, and a gesture that started a drag
	/// never selects, even with zero movement.
	SuppressAfterPress,
	/// Only gestures that actually moved the view are swallowed.
	#[default]
	SuppressAfterMove,
}

/// Ephemeral pointer-gesture state. Never part of the persisted view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gesture {
	pub is_dragging: bool,
	/// Pointer position minus offset at press time.
	pub drag_start: Point,
	started: bool,
	moved: bool,
}

/// Mouse button index of the primary button.
pub const PRIMARY_BUTTON: i16 = 0;

/// View state plus the pointer gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasState {
	pub view: ViewState,
	pub gesture: Gesture,
	pub policy: ClickPolicy,
}

impl CanvasState {
	pub fn with_policy(policy: ClickPolicy) -> Self {
		Self {
			policy,
			..Self::default()
		}
	}

	pub fn pointer_down(&mut self, button: i16, pos: Point) {
		if button != PRIMARY_BUTTON {
			return;
		}
		self.gesture = Gesture {
			is_dragging: true,
			drag_start: Point::new(pos.x - self.view.offset.x, pos.y - self.view.offset.y),
			started: true,
			moved: false,
		};
	}

	/// Returns whether the view changed.
	pub fn pointer_move(&mut self, pos: Point) -> bool {
		if !self.gesture.is_dragging {
			return false;
		}
		let offset = Point::new(pos.x - self.gesture.drag_start.x, pos.y - self.gesture.drag_start.y);
		if offset == self.view.offset {
			return false;
		}
		self.view.offset = offset;
		self.gesture.moved = true;
		true
	}

	/// Release or pointer-leave.
	pub fn pointer_up(&mut self) {
		self.gesture.is_dragging = false;
	}

	/// Resolves the click that closes the current gesture, if it selects.
	pub fn click(&mut self, model: &GraphModel, size: DeviceSize, pos: Point) -> Option<String> {
		let suppressed = match self.policy {
			ClickPolicy::SuppressAfterPress => self.gesture.started,
			ClickPolicy::SuppressAfterMove => self.gesture.moved,
		} || self.gesture.is_dragging;
		self.gesture = Gesture::default();
		if suppressed || model.is_empty() {
			return None;
		}
		hit_test(model, &self.view, size, pos).map(str::to_owned)
	}
}

/// Which of the three mutually exclusive views the canvas shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasPhase {
	Loading,
	Empty,
	Populated,
}

impl CanvasPhase {
	pub fn select(is_loading: bool, concept_count: usize) -> Self {
		match (is_loading, concept_count) {
			(true, _) => Self::Loading,
			(false, 0) => Self::Empty,
			_ => Self::Populated,
		}
	}
}
