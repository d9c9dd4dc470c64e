//! The parts on hand.

use crate::flavor::FlavorSource;
use crate::parts::{
    CarpenterAntColony, MustyArmChair, Part, PileOfBeams, RustyCarAxle, RustyOldCar,
    SaltyBoatRope, WoodenBeam,
};
use derive_getters::Getters;
use strum::IntoEnumIterator;
use trebuchet_error::{ConfigError, TrebuchetResult};
use tracing::{debug, instrument};

/// What each part is for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PartRole {
    /// Beams for the frame
    SupportBeams,
    /// Beam for the throwing arm
    LeverBeam,
    /// Rope for lashing the frame
    Rope,
    /// Weight that powers the throw
    Counterweight,
    /// Pivot for the lever
    Axle,
    /// Seat for the passenger
    Sling,
    /// Ants that raise the counterweight
    PullForce,
}

/// Whether a part is available, and whether it has been built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum PartStatus {
    /// Used up or absent
    Missing,
    /// On hand, not yet used
    Present,
    /// Built into the trebuchet
    Attached,
}

/// Parts by role.
///
/// Only the rope changes after construction, as it is consumed while the frame
/// is lashed together.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Inventory {
    /// Beams for the frame
    #[builder(default = "PileOfBeams::gather(6, 15)")]
    support_beams: PileOfBeams,
    /// Beam for the throwing arm
    #[builder(default = "WoodenBeam::new(25)")]
    lever_beam: WoodenBeam,
    /// Rope for lashing the frame
    #[builder(default = "SaltyBoatRope::new(120)")]
    rope: SaltyBoatRope,
    /// Car used as counterweight
    #[builder(default = "RustyOldCar::new(\"Vauxhall\", \"Corsa\", 997)")]
    counterweight: RustyOldCar,
    /// Pivot for the lever
    #[builder(default)]
    axle: RustyCarAxle,
    /// Seat for the passenger
    #[builder(default)]
    sling: MustyArmChair,
    /// Ants that raise the counterweight
    pull_force: CarpenterAntColony,
    /// Car the axle came from
    #[builder(default, setter(into, strip_option))]
    donor_car: Option<RustyOldCar>,
}

impl Inventory {
    /// Returns a builder with the standard parts filled in as defaults.
    pub fn builder() -> InventoryBuilder {
        InventoryBuilder::default()
    }

    /// Gathers the standard parts with a colony of `ant_count` ants.
    ///
    /// The axle is torn from a Ford Fiesta, which is kept as the donor car.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `ant_count` is zero.
    #[instrument]
    pub fn standard(ant_count: u64) -> TrebuchetResult<Self> {
        if ant_count == 0 {
            return Err(ConfigError::new("Ant colony cannot be empty").into());
        }

        let mut donor = RustyOldCar::new("Ford", "Fiesta", 600);
        let axle = donor.remove_axle()?;

        let inventory = Self::builder()
            .axle(axle)
            .donor_car(donor)
            .pull_force(CarpenterAntColony::new(ant_count))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to gather parts: {}", e)))?;

        debug!(ant_count, "Standard inventory gathered");
        Ok(inventory)
    }

    /// The part filling `role`.
    pub fn part(&self, role: PartRole) -> &dyn Part {
        match role {
            PartRole::SupportBeams => &self.support_beams,
            PartRole::LeverBeam => &self.lever_beam,
            PartRole::Rope => &self.rope,
            PartRole::Counterweight => &self.counterweight,
            PartRole::Axle => &self.axle,
            PartRole::Sling => &self.sling,
            PartRole::PullForce => &self.pull_force,
        }
    }

    /// All parts in checklist order.
    pub fn parts(&self) -> impl Iterator<Item = (PartRole, &dyn Part)> + '_ {
        PartRole::iter().map(move |role| (role, self.part(role)))
    }

    /// Checklist line for the part filling `role`.
    pub fn status_line(&self, role: PartRole, flavor: &mut dyn FlavorSource) -> String {
        self.part(role).status_line(flavor)
    }

    pub(crate) fn rope_mut(&mut self) -> &mut SaltyBoatRope {
        &mut self.rope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_inventory() {
        let inventory = Inventory::standard(175_000).unwrap();
        assert_eq!(inventory.support_beams().quantity(), 6);
        assert_eq!(*inventory.lever_beam().length(), 25);
        assert_eq!(*inventory.rope().length(), 120);
        assert_eq!(*inventory.counterweight().weight(), 997);
        assert_eq!(*inventory.pull_force().colony_size(), 175_000);

        let donor = inventory.donor_car().as_ref().unwrap();
        assert_eq!(*donor.axles(), 1);
        assert_eq!(*donor.weight(), 400);
    }

    #[test]
    fn test_parts_in_role_order() {
        let inventory = Inventory::standard(1).unwrap();
        let roles: Vec<PartRole> = inventory.parts().map(|(role, _)| role).collect();
        assert_eq!(
            roles,
            vec![
                PartRole::SupportBeams,
                PartRole::LeverBeam,
                PartRole::Rope,
                PartRole::Counterweight,
                PartRole::Axle,
                PartRole::Sling,
                PartRole::PullForce,
            ]
        );
    }

    #[test]
    fn test_empty_colony_rejected() {
        assert!(Inventory::standard(0).is_err());
    }

    #[test]
    fn test_role_names() {
        assert_eq!(PartRole::SupportBeams.to_string(), "support_beams");
        assert_eq!(PartRole::PullForce.as_ref(), "pull_force");
    }
}
