const SOLAR_MASS_KG: f64 = 1.989e30; // In kg
const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11; // In m^3/(kg*s^2)
const SPEED_OF_LIGHT: f64 = 2.998e8; // In m/s

/// The speed of light in km/s, for converting fractions of c.
pub const SPEED_OF_LIGHT_KMS: f64 = 2.998e5;

/// Conversion factors from geometrized units (G = c = 1) to SI.
///
/// The simulation measures every quantity in units of the total system mass
/// M. For a binary of a given mass in solar masses, one unit of length is
/// `G*M/c^2` meters and one unit of time is `G*M/c^3` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversion {
    /// The total system mass in kilograms.
    pub total_mass_kg: f64,
    /// The length of one geometrized unit M, in meters.
    pub length_m: f64,
    /// The duration of one geometrized unit M, in seconds.
    pub time_s: f64,
}

impl UnitConversion {
    /// Builds the conversion factors for a binary with the given total mass
    /// in solar masses.
    pub fn from_solar_masses(solar_masses: f64) -> Self {
        let total_mass_kg = solar_masses * SOLAR_MASS_KG;
        let length_m = GRAVITATIONAL_CONSTANT * total_mass_kg / (SPEED_OF_LIGHT * SPEED_OF_LIGHT);
        let time_s = length_m / SPEED_OF_LIGHT;
        Self {
            total_mass_kg,
            length_m,
            time_s,
        }
    }
}
