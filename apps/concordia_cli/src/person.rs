use concordia_types::BirthData;
use std::str::FromStr;

/// One person on the command line: `DATE,HH:mm,LAT,LNG,OFFSET[,NAME]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSpec {
    pub birth: BirthData,
    pub name: String,
}

impl FromStr for PersonSpec {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.splitn(6, ',').map(str::trim);
        let mut next = |what: &str| {
            parts
                .next()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| format!("missing {what} in '{raw}'"))
        };
        let date = next("date")?;
        let time = next("time")?;
        let number = |what: &str, s: &str| {
            s.parse::<f64>()
                .map_err(|_| format!("invalid {what} '{s}'"))
        };
        let lat = number("latitude", next("latitude")?)?;
        let lng = number("longitude", next("longitude")?)?;
        let offset = number("offset", next("offset")?)?;
        let name = next("name").unwrap_or_default().to_string();

        let birth = BirthData::parse(date, time, lat, lng, offset).map_err(|e| e.to_string())?;
        Ok(Self { birth, name })
    }
}
