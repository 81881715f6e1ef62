//! SI quantity types for conduit geometry and fluid properties.

use uom::si::f64::{Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength};

pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

pub mod constants {
    /// Viscosity of water at 298 K [Pa·s]
    pub const WATER_VISCOSITY_PA_S: f64 = 8.9e-4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::area::square_micrometer;
    use uom::si::dynamic_viscosity::centipoise;

    #[test]
    fn constructors_store_si_values() {
        assert_eq!(m(2.0).value, 2.0);
        assert!((m2(1e-12).get::<square_micrometer>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn water_is_about_one_centipoise() {
        let mu = pa_s(constants::WATER_VISCOSITY_PA_S);
        assert!((mu.get::<centipoise>() - 0.89).abs() < 1e-12);
    }
}
