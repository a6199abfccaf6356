//! Built-in unit definitions

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;

use super::dimension::{BaseDimension, Dimension};

/// A named unit with its conversion to SI
///
/// `si = (magnitude + offset) * factor`. Only temperature scales carry an offset.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDef {
    /// Canonical name used for display
    pub name: &'static str,
    /// Short symbol
    pub symbol: &'static str,
    /// Extra accepted spellings
    pub aliases: &'static [&'static str],
    /// Multiplier to the SI coherent unit
    pub factor: f64,
    /// Offset added before scaling (non-zero for degC, degF, degR)
    pub offset: f64,
    /// Dimension of the unit
    pub dimension: Dimension,
}

impl UnitDef {
    /// Whether the unit has a non-zero offset
    pub fn is_offset(&self) -> bool {
        self.offset != 0.0
    }
}

// Exponent order: length, mass, time, temperature, current, luminosity, substance
const NONE: Dimension = Dimension::DIMENSIONLESS;
const LENGTH: Dimension = Dimension::from_exponents([1, 0, 0, 0, 0, 0, 0]);
const MASS: Dimension = Dimension::from_exponents([0, 1, 0, 0, 0, 0, 0]);
const TIME: Dimension = Dimension::from_exponents([0, 0, 1, 0, 0, 0, 0]);
const TEMPERATURE: Dimension = Dimension::from_exponents([0, 0, 0, 1, 0, 0, 0]);
const CURRENT: Dimension = Dimension::from_exponents([0, 0, 0, 0, 1, 0, 0]);
const LUMINOSITY: Dimension = Dimension::from_exponents([0, 0, 0, 0, 0, 1, 0]);
const SUBSTANCE: Dimension = Dimension::from_exponents([0, 0, 0, 0, 0, 0, 1]);
const AREA: Dimension = Dimension::from_exponents([2, 0, 0, 0, 0, 0, 0]);
const VOLUME: Dimension = Dimension::from_exponents([3, 0, 0, 0, 0, 0, 0]);
const SPEED: Dimension = Dimension::from_exponents([1, 0, -1, 0, 0, 0, 0]);
const FORCE: Dimension = Dimension::from_exponents([1, 1, -2, 0, 0, 0, 0]);
const PRESSURE: Dimension = Dimension::from_exponents([-1, 1, -2, 0, 0, 0, 0]);

const INCH: f64 = 0.0254;
const FOOT: f64 = 12.0 * INCH;
const MILE: f64 = 5280.0 * FOOT;
const POUND: f64 = 0.453_592_37;
const GALLON: f64 = 231.0 * INCH * INCH * INCH;

const fn def(
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    factor: f64,
    dimension: Dimension,
) -> UnitDef {
    UnitDef {
        name,
        symbol,
        aliases,
        factor,
        offset: 0.0,
        dimension,
    }
}

const fn offset_def(
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    factor: f64,
    offset: f64,
) -> UnitDef {
    UnitDef {
        name,
        symbol,
        aliases,
        factor,
        offset,
        dimension: TEMPERATURE,
    }
}

static DEFINITIONS: &[UnitDef] = &[
    // Length
    def("meter", "m", &["metre"], 1.0, LENGTH),
    def("centimeter", "cm", &["centimetre"], 1e-2, LENGTH),
    def("millimeter", "mm", &["millimetre"], 1e-3, LENGTH),
    def("kilometer", "km", &["kilometre"], 1e3, LENGTH),
    def("inch", "in", &["inches"], INCH, LENGTH),
    def("foot", "ft", &["feet"], FOOT, LENGTH),
    def("yard", "yd", &[], 3.0 * FOOT, LENGTH),
    def("mile", "mi", &[], MILE, LENGTH),
    // Mass
    def("gram", "g", &["gramme"], 1e-3, MASS),
    def("milligram", "mg", &[], 1e-6, MASS),
    def("kilogram", "kg", &[], 1.0, MASS),
    def("pound", "lb", &["lbs"], POUND, MASS),
    def("ounce", "oz", &[], POUND / 16.0, MASS),
    // Time
    def("second", "s", &["sec"], 1.0, TIME),
    def("minute", "min", &[], 60.0, TIME),
    def("hour", "h", &["hr"], 3600.0, TIME),
    def("day", "d", &[], 86_400.0, TIME),
    // Temperature
    def("kelvin", "K", &[], 1.0, TEMPERATURE),
    offset_def("degree_Celsius", "degC", &["celsius", "°C"], 1.0, 273.15),
    offset_def("degree_Fahrenheit", "degF", &["fahrenheit", "°F"], 5.0 / 9.0, 459.67),
    offset_def("degree_Rankine", "degR", &["rankine"], 5.0 / 9.0, 0.0),
    // Other SI base units
    def("ampere", "A", &["amp"], 1.0, CURRENT),
    def("candela", "cd", &[], 1.0, LUMINOSITY),
    def("mole", "mol", &[], 1.0, SUBSTANCE),
    // Angle (dimensionless)
    def("radian", "rad", &[], 1.0, NONE),
    def("degree", "deg", &[], PI / 180.0, NONE),
    // Volume
    def("liter", "L", &["l", "litre"], 1e-3, VOLUME),
    def("milliliter", "mL", &["ml", "millilitre"], 1e-6, VOLUME),
    def("gallon", "gal", &[], GALLON, VOLUME),
    def("quart", "qt", &[], GALLON / 4.0, VOLUME),
    def("pint", "pt", &[], GALLON / 8.0, VOLUME),
    def("cup", "cp", &[], GALLON / 16.0, VOLUME),
    def("fluid_ounce", "floz", &["fl_oz"], GALLON / 128.0, VOLUME),
    // Area
    def("acre", "ac", &[], 4_046.856_422_4, AREA),
    def("hectare", "ha", &[], 1e4, AREA),
    // Speed
    def("mile_per_hour", "mph", &[], MILE / 3600.0, SPEED),
    def("kilometer_per_hour", "kph", &["kmh"], 1e3 / 3600.0, SPEED),
    def("knot", "kn", &["kt"], 1852.0 / 3600.0, SPEED),
    // Force and pressure
    def("newton", "N", &[], 1.0, FORCE),
    def("pascal", "Pa", &[], 1.0, PRESSURE),
    def("pound_force_per_square_inch", "psi", &[], 6_894.757_293_168_361, PRESSURE),
    def("bar", "bar", &[], 1e5, PRESSURE),
    // Ratios
    def("dimensionless", "", &[], 1.0, NONE),
    def("percent", "%", &["pct"], 1e-2, NONE),
    def("parts_per_million", "ppm", &[], 1e-6, NONE),
    def("parts_per_billion", "ppb", &[], 1e-9, NONE),
];

/// Lookup table: name, symbol and alias → definition
static INDEX: LazyLock<HashMap<&'static str, &'static UnitDef>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for def in DEFINITIONS {
        index.insert(def.name, def);
        if !def.symbol.is_empty() {
            index.insert(def.symbol, def);
        }
        for alias in def.aliases {
            index.insert(*alias, def);
        }
    }
    tracing::debug!(units = DEFINITIONS.len(), keys = index.len(), "unit catalogue indexed");
    index
});

/// All built-in unit definitions
pub fn definitions() -> &'static [UnitDef] {
    DEFINITIONS
}

/// Coherent SI unit of a base dimension
pub fn base_unit(base: BaseDimension) -> &'static UnitDef {
    // Indices into DEFINITIONS
    let index = match base {
        BaseDimension::Length => 0,
        BaseDimension::Mass => 10,
        BaseDimension::Time => 13,
        BaseDimension::Temperature => 17,
        BaseDimension::ElectricCurrent => 21,
        BaseDimension::LuminousIntensity => 22,
        BaseDimension::AmountOfSubstance => 23,
    };
    &DEFINITIONS[index]
}

/// Resolve a unit name, symbol, alias or plural
pub fn lookup(name: &str) -> Option<&'static UnitDef> {
    if let Some(def) = INDEX.get(name) {
        return Some(*def);
    }

    // Plural forms ("gallons", "meters")
    let singular = name.strip_suffix('s')?;
    if singular.is_empty() {
        return None;
    }
    INDEX
        .get(singular)
        .copied()
        .filter(|def| def.name == singular || def.aliases.iter().any(|a| *a == singular))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_symbol_alias() {
        assert_eq!(lookup("gallon").unwrap().name, "gallon");
        assert_eq!(lookup("gal").unwrap().name, "gallon");
        assert_eq!(lookup("litre").unwrap().name, "liter");
        assert_eq!(lookup("degC").unwrap().name, "degree_Celsius");
    }

    #[test]
    fn test_plural_lookup() {
        assert_eq!(lookup("gallons").unwrap().name, "gallon");
        assert_eq!(lookup("meters").unwrap().name, "meter");
        // Symbols do not pluralize: "ms" is not "m"
        assert!(lookup("ms").is_none());
    }

    #[test]
    fn test_unknown_unit() {
        assert!(lookup("furlongish").is_none());
        assert!(lookup("s").is_some());
    }

    #[test]
    fn test_base_units() {
        for base in BaseDimension::ALL {
            let def = base_unit(base);
            assert_eq!(def.factor, 1.0, "{} is not coherent", def.name);
            assert_eq!(def.dimension, Dimension::base(base));
        }
    }

    #[test]
    fn test_symbols_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in definitions() {
            if !def.symbol.is_empty() {
                assert!(seen.insert(def.symbol), "duplicate symbol {}", def.symbol);
            }
        }
    }
}
