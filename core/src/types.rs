/// Geometry primitives shared by the layout algorithms. These mirror the
/// host toolkit's point/size types so the core crate stays free of any GUI
/// dependency.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height * 0.5
    }
}

/// A size proposal handed to a container before it commits to a layout.
/// `None` on an axis asks the item for its ideal extent on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Proposal {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Proposal {
    pub const UNSPECIFIED: Proposal = Proposal {
        width: None,
        height: None,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn width_only(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }
}

/// Which point of the item the placement origin refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// One item's resolved position for a single layout pass. Has no identity
/// beyond the pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: Point,
    pub anchor: Anchor,
    pub proposal: Proposal,
}

/// A layout child: anything that can report how large it wants to be for a
/// given proposal. Implemented per host widget type.
pub trait Measurable {
    fn size_that_fits(&self, proposal: Proposal) -> Size;
}

/// Fixed-extent item, used by the demos and in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSize(pub Size);

impl FixedSize {
    pub fn from_height(height: f32) -> Self {
        Self(Size::new(0.0, height))
    }
}

impl Measurable for FixedSize {
    fn size_that_fits(&self, _proposal: Proposal) -> Size {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Thunder,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Thunder => "thunder",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀",
            Condition::Cloudy => "☁",
            Condition::Rainy => "☂",
            Condition::Thunder => "⚡",
        }
    }

    pub fn parse(raw: &str) -> Option<Condition> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sunny" => Some(Condition::Sunny),
            "cloudy" => Some(Condition::Cloudy),
            "rainy" => Some(Condition::Rainy),
            "thunder" => Some(Condition::Thunder),
            _ => None,
        }
    }
}

/// One hour of weather data. Samples arrive as an ordered sequence whose
/// position matches `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSample {
    pub time: i32,
    pub temperature: i32,
    pub condition: Condition,
}
