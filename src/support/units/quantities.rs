/// Body mass index, kg/m² in SI.
pub type BodyMassIndex = uom::si::f64::ArealMassDensity;
