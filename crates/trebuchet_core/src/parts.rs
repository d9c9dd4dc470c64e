//! Building materials.

use crate::flavor::FlavorSource;
use derive_getters::Getters;
use trebuchet_error::{AssemblyError, AssemblyErrorKind};
use tracing::{debug, instrument};

/// A piece of building material that can report on itself during the parts
/// check.
pub trait Part {
    /// Whether the part can still be used.
    ///
    /// Parts are present unless they have been used up.
    fn is_present(&self) -> bool {
        true
    }

    /// Checklist line for this part.
    fn status_line(&self, flavor: &mut dyn FlavorSource) -> String;
}

/// Beam used for the frame and the lever arm.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_new::new, Getters, derive_more::Display,
)]
#[display("A sturdy, wooden beam {} meters long", length)]
pub struct WoodenBeam {
    /// Length in meters
    length: u32,
}

impl Part for WoodenBeam {
    fn status_line(&self, _flavor: &mut dyn FlavorSource) -> String {
        format!("{}: check!", self)
    }
}

/// A bundle of beams for the frame.
///
/// The bundle holds its beams; it is not itself a beam.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PileOfBeams {
    /// Beams in the bundle
    beams: Vec<WoodenBeam>,
}

impl PileOfBeams {
    /// Gathers `quantity` beams of the same length.
    pub fn gather(quantity: usize, length: u32) -> Self {
        Self {
            beams: vec![WoodenBeam::new(length); quantity],
        }
    }

    /// Number of beams in the bundle.
    pub fn quantity(&self) -> usize {
        self.beams.len()
    }
}

impl Part for PileOfBeams {
    fn is_present(&self) -> bool {
        !self.beams.is_empty()
    }

    fn status_line(&self, _flavor: &mut dyn FlavorSource) -> String {
        match self.beams.first() {
            Some(beam) => format!("{}: yeeeep x({})!", beam, self.quantity()),
            None => "An empty patch of grass where the beams should be: nope!".to_string(),
        }
    }
}

/// Rope used to lash parts together. Tracks how much is left.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new, Getters, derive_more::Display)]
#[display(
    "{} meters of fraying rope that smells vaguely like Margate, Kent...",
    length
)]
pub struct SaltyBoatRope {
    /// Remaining length in meters
    length: u32,
}

impl SaltyBoatRope {
    /// Uses `how_much` meters of rope, returning the length left.
    ///
    /// The rope is left untouched when fewer than `how_much` meters remain.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientRope` if the rope is shorter than `how_much`.
    #[instrument(skip(self), fields(remaining = self.length))]
    pub fn attach(&mut self, how_much: u32) -> Result<u32, AssemblyError> {
        if self.length < how_much {
            return Err(AssemblyError::new(AssemblyErrorKind::InsufficientRope {
                requested: how_much,
                remaining: self.length,
            }));
        }

        self.length -= how_much;
        debug!(used = how_much, remaining = self.length, "Rope attached");
        Ok(self.length)
    }
}

impl Part for SaltyBoatRope {
    fn is_present(&self) -> bool {
        self.length > 0
    }

    fn status_line(&self, _flavor: &mut dyn FlavorSource) -> String {
        format!("{}: yup!", self)
    }
}

/// An old car. Heavy enough for a counterweight, and a source of axles.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_more::Display)]
#[display("Rusty {} {} ", make, model)]
pub struct RustyOldCar {
    /// Manufacturer
    make: String,
    /// Model name
    model: String,
    /// Weight in kilograms
    weight: u32,
    /// Axles still attached
    axles: u32,
}

impl RustyOldCar {
    /// Weight lost with each axle removed.
    pub const AXLE_WEIGHT: u32 = 200;

    /// Creates a car with both of its axles.
    pub fn new(make: impl Into<String>, model: impl Into<String>, weight: u32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            weight,
            axles: 2,
        }
    }

    /// Tears an axle off the car.
    ///
    /// # Errors
    ///
    /// Returns `NoAxleRemaining` if the car has no axles left.
    #[instrument(skip(self), fields(make = %self.make, model = %self.model, axles = self.axles))]
    pub fn remove_axle(&mut self) -> Result<RustyCarAxle, AssemblyError> {
        if self.axles < 1 {
            return Err(AssemblyError::new(AssemblyErrorKind::NoAxleRemaining {
                make: self.make.clone(),
                model: self.model.clone(),
            }));
        }

        self.axles -= 1;
        self.weight = self.weight.saturating_sub(Self::AXLE_WEIGHT);
        debug!(axles = self.axles, weight = self.weight, "Axle removed");
        Ok(RustyCarAxle)
    }
}

impl Part for RustyOldCar {
    fn status_line(&self, _flavor: &mut dyn FlavorSource) -> String {
        format!("{}: got it!", self)
    }
}

/// Axle taken from a [`RustyOldCar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RustyCarAxle;

impl Part for RustyCarAxle {
    fn status_line(&self, _flavor: &mut dyn FlavorSource) -> String {
        "Rusty axle torn from a hoopty: done!".to_string()
    }
}

/// The sling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MustyArmChair;

impl Part for MustyArmChair {
    fn status_line(&self, _flavor: &mut dyn FlavorSource) -> String {
        "'Well-loved', lumpy armchair: yes!".to_string()
    }
}

/// Ants that haul the counterweight up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new, Getters)]
pub struct CarpenterAntColony {
    /// Number of ants
    colony_size: u64,
}

impl CarpenterAntColony {
    /// Describes the colony in a randomly chosen mood.
    pub fn describe(&self, flavor: &mut dyn FlavorSource) -> String {
        format!("{} {}, marching ants", self.colony_size, flavor.ant_mood())
    }
}

impl Part for CarpenterAntColony {
    fn is_present(&self) -> bool {
        self.colony_size > 0
    }

    fn status_line(&self, flavor: &mut dyn FlavorSource) -> String {
        format!(
            "{} secured by floss: check x({})!",
            self.describe(flavor),
            self.colony_size
        )
    }
}
