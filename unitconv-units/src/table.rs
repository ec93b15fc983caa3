//! Unit definitions - one scale table per quantity
//!
//! Each table maps a unit alias to "how many base units this alias equals".
//! Aliases are stored lowercase and are namespaced by quantity: "m" is a
//! meter under `length` and a molar under `concentration`.

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::sync::LazyLock;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Scale factors for the aliases of one quantity
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    quantity: &'static str,
    base: &'static str,
    scales: BTreeMap<String, f64>,
}

impl UnitTable {
    /// Create an empty table whose base unit is `base`
    pub fn new(quantity: &'static str, base: &'static str) -> Self {
        UnitTable {
            quantity,
            base,
            scales: BTreeMap::new(),
        }
    }

    /// Register every alias in `aliases` with the same scale factor
    pub fn unit(&mut self, factor: f64, aliases: &[&str]) -> &mut Self {
        debug_assert!(
            factor.is_finite() && factor > 0.0,
            "scale factor for {:?} must be positive and finite",
            aliases
        );
        for alias in aliases {
            let key = normalize(alias);
            let previous = self.scales.insert(key, factor);
            debug_assert!(
                previous.map_or(true, |p| p == factor),
                "alias {} registered twice with different factors in {}",
                alias,
                self.quantity
            );
        }
        self
    }

    /// Quantity name this table belongs to
    pub fn quantity(&self) -> &'static str {
        self.quantity
    }

    /// Alias of the unit with scale factor 1.0
    pub fn base_unit(&self) -> &'static str {
        self.base
    }

    /// Scale factor of a unit, or None if the alias is unknown
    pub fn scale(&self, unit: &str) -> Option<f64> {
        self.scales.get(&normalize(unit)).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.scale(unit).is_some()
    }

    /// All aliases, deduplicated and in lexicographic order
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    /// (alias, factor) pairs in lexicographic alias order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scales.iter().map(|(alias, factor)| (alias.as_str(), *factor))
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

/// Registry of all scale tables, keyed by quantity name
#[derive(Debug)]
pub struct UnitRegistry {
    tables: BTreeMap<&'static str, UnitTable>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            tables: BTreeMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get the table for a quantity. Case-insensitive, whitespace trimmed.
    pub fn get(&self, quantity: &str) -> Option<&UnitTable> {
        self.tables.get(normalize(quantity).as_str())
    }

    /// Quantity names with a scale table, in lexicographic order
    pub fn quantities(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }

    pub fn tables(&self) -> impl Iterator<Item = &UnitTable> {
        self.tables.values()
    }

    fn register(&mut self, table: UnitTable) {
        self.tables.insert(table.quantity, table);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_time_units();
        self.register_area_units();
        self.register_volume_units();
        self.register_speed_units();
        self.register_pressure_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_data_units();
        self.register_angle_units();
        self.register_force_units();
        self.register_frequency_units();
        self.register_electrical_units();
        self.register_luminosity_units();
        self.register_amount_units();
        self.register_magnetic_units();
    }

    fn register_length_units(&mut self) {
        let mut t = UnitTable::new("length", "m");
        t.unit(1.0, &["m", "meter", "meters"])
            .unit(0.001, &["mm", "millimeter", "millimeters"])
            .unit(0.01, &["cm", "centimeter", "centimeters"])
            .unit(1000.0, &["km", "kilometer", "kilometers"])
            .unit(0.0254, &["in", "inch", "inches"])
            .unit(0.3048, &["ft", "foot", "feet"])
            .unit(0.9144, &["yd", "yard", "yards"])
            .unit(1609.344, &["mi", "mile", "miles"]);
        self.register(t);
    }

    fn register_mass_units(&mut self) {
        let mut t = UnitTable::new("mass", "kg");
        t.unit(1.0, &["kg", "kilogram", "kilograms"])
            .unit(0.001, &["g", "gram", "grams"])
            .unit(1e-6, &["mg", "milligram", "milligrams"])
            .unit(0.45359237, &["lb", "pound", "pounds"])
            .unit(0.028349523125, &["oz", "ounce", "ounces"]);
        self.register(t);
    }

    fn register_time_units(&mut self) {
        let mut t = UnitTable::new("time", "s");
        t.unit(1.0, &["s", "sec", "second", "seconds"])
            .unit(60.0, &["min", "minute", "minutes"])
            .unit(3600.0, &["h", "hr", "hour", "hours"])
            .unit(86400.0, &["day", "days"]);
        self.register(t);
    }

    fn register_area_units(&mut self) {
        let mut t = UnitTable::new("area", "m2");
        t.unit(1.0, &["m2", "m^2", "sqm"])
            .unit(0.0001, &["cm2", "cm^2"])
            .unit(1e6, &["km2", "km^2"])
            .unit(10000.0, &["ha", "hectare"])
            .unit(4046.8564224, &["acre"]);
        self.register(t);
    }

    fn register_volume_units(&mut self) {
        let mut t = UnitTable::new("volume", "m3");
        t.unit(1.0, &["m3", "m^3"])
            .unit(0.001, &["l", "liter", "litre"])
            .unit(1e-6, &["ml"])
            .unit(1e-6, &["cm3", "cm^3", "cc"])
            .unit(0.003785411784, &["gal", "gallon"]);
        self.register(t);
    }

    fn register_speed_units(&mut self) {
        let mut t = UnitTable::new("speed", "m/s");
        t.unit(1.0, &["m/s", "mps"])
            .unit(1000.0 / 3600.0, &["km/h", "kph"])
            .unit(1609.344 / 3600.0, &["mph"])
            .unit(1852.0 / 3600.0, &["knot"]);
        self.register(t);
    }

    fn register_pressure_units(&mut self) {
        let mut t = UnitTable::new("pressure", "pa");
        t.unit(1.0, &["pa", "pascal"])
            .unit(1000.0, &["kpa"])
            .unit(100000.0, &["bar"])
            .unit(101325.0, &["atm"])
            .unit(6894.757293168, &["psi"]);
        self.register(t);
    }

    fn register_energy_units(&mut self) {
        let mut t = UnitTable::new("energy", "j");
        t.unit(1.0, &["j", "joule"])
            .unit(1000.0, &["kj"])
            .unit(4.184, &["cal"])
            .unit(4184.0, &["kcal"])
            .unit(3600.0, &["wh"])
            .unit(3.6e6, &["kwh"])
            .unit(1.602176634e-19, &["ev"]);
        self.register(t);
    }

    fn register_power_units(&mut self) {
        let mut t = UnitTable::new("power", "w");
        t.unit(1.0, &["w", "watt"])
            .unit(1000.0, &["kw"])
            // mechanical horsepower
            .unit(745.699872, &["hp"]);
        self.register(t);
    }

    fn register_data_units(&mut self) {
        let mut t = UnitTable::new("data", "b");
        t.unit(1.0, &["b", "byte"])
            .unit(1024.0, &["kb", "kib"])
            .unit(1024.0_f64.powi(2), &["mb"])
            .unit(1024.0_f64.powi(3), &["gb"])
            .unit(1024.0_f64.powi(4), &["tb"])
            .unit(1.0 / 8.0, &["bit"]);
        self.register(t);
    }

    fn register_angle_units(&mut self) {
        let mut t = UnitTable::new("angle", "rad");
        t.unit(1.0, &["rad", "radian", "radians"])
            .unit(PI / 180.0, &["deg", "degree"]);
        self.register(t);
    }

    fn register_force_units(&mut self) {
        let mut t = UnitTable::new("force", "n");
        t.unit(1.0, &["n", "newton"])
            .unit(1000.0, &["kn", "kN"])
            .unit(4.4482216152605, &["lbf", "pound-force"]);
        self.register(t);
    }

    fn register_frequency_units(&mut self) {
        let mut t = UnitTable::new("frequency", "hz");
        t.unit(1.0, &["hz", "hertz"])
            .unit(1e3, &["khz"])
            .unit(1e6, &["mhz"])
            .unit(1e9, &["ghz"])
            .unit(1.0 / 60.0, &["rpm"]);
        self.register(t);
    }

    fn register_electrical_units(&mut self) {
        let mut current = UnitTable::new("electric_current", "a");
        current.unit(1.0, &["a", "amp", "ampere"]).unit(1e-3, &["ma"]);
        self.register(current);

        let mut voltage = UnitTable::new("voltage", "v");
        voltage
            .unit(1.0, &["v", "volt"])
            .unit(1e-3, &["mv"])
            .unit(1e3, &["kv"]);
        self.register(voltage);

        let mut resistance = UnitTable::new("resistance", "ohm");
        resistance
            .unit(1.0, &["ohm", "ω", "ohms"])
            .unit(1e3, &["kohm", "kω"])
            .unit(1e-3, &["mohm"]);
        self.register(resistance);

        let mut capacitance = UnitTable::new("capacitance", "f");
        capacitance
            .unit(1.0, &["f", "farad"])
            .unit(1e-3, &["mf"])
            .unit(1e-6, &["uf"])
            .unit(1e-9, &["nf"])
            .unit(1e-12, &["pf"]);
        self.register(capacitance);

        let mut inductance = UnitTable::new("inductance", "h");
        inductance
            .unit(1.0, &["h", "henry"])
            .unit(1e-3, &["mh"])
            .unit(1e-6, &["uh"]);
        self.register(inductance);
    }

    fn register_luminosity_units(&mut self) {
        let mut flux = UnitTable::new("luminous_flux", "lm");
        flux.unit(1.0, &["lm", "lumen"]);
        self.register(flux);

        let mut intensity = UnitTable::new("luminous_intensity", "cd");
        intensity.unit(1.0, &["cd", "candela"]);
        self.register(intensity);

        let mut illuminance = UnitTable::new("illuminance", "lx");
        illuminance.unit(1.0, &["lx", "lux"]);
        self.register(illuminance);
    }

    fn register_amount_units(&mut self) {
        let mut amount = UnitTable::new("amount", "mol");
        amount
            .unit(1.0, &["mol", "mole"])
            .unit(1e-3, &["mmol"])
            .unit(1e-6, &["umol", "μmol"]);
        self.register(amount);

        // base: mol per liter (M)
        let mut concentration = UnitTable::new("concentration", "m");
        concentration
            .unit(1.0, &["m", "molar", "mol/l", "mol/liter"])
            .unit(1e-3, &["mmol/l"])
            .unit(1000.0, &["mol/m3"]);
        self.register(concentration);
    }

    fn register_magnetic_units(&mut self) {
        let mut t = UnitTable::new("magnetic_flux_density", "t");
        t.unit(1.0, &["t", "tesla"]).unit(1e-4, &["gauss"]);
        self.register(t);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup key for quantity and unit names
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
