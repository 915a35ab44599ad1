/// The radio channel and network name an access point serves. A station
/// assigned to the access point is configured with both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub number: u16,
    pub ssid: String,
}

impl Channel {
    pub fn new(number: u16, ssid: impl Into<String>) -> Self {
        Self {
            number,
            ssid: ssid.into(),
        }
    }

    /// Center frequency in GHz for 2.4 GHz and 5 GHz band channel numbers.
    pub fn center_frequency_ghz(&self) -> Option<f64> {
        let mhz = match self.number {
            1..=13 => 2407 + 5 * u32::from(self.number),
            14 => 2484,
            32..=177 => 5000 + 5 * u32::from(self.number),
            _ => return None,
        };
        Some(f64::from(mhz) / 1000.0)
    }
}
