//! JSON export and import of whole save collections.

use super::Gvas;
use crate::util::Result;

impl Gvas {
    /// Serialize the collection as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a collection from JSON and check its key bookkeeping.
    pub fn from_json(s: &str) -> Result<Self> {
        let gvas: Gvas = serde_json::from_str(s)?;
        gvas.validate()?;
        Ok(gvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{GvasHeader, PropertyValue};
    use crate::text::encode;
    use crate::util::{Error, Vector};

    #[test]
    fn test_json_round_trip() {
        let mut gvas = Gvas::new(GvasHeader {
            gvas_version: 2,
            save_type: Some("/Script/arr.arrSaveGame".into()),
            ..GvasHeader::default()
        });
        gvas.insert("SaveGameDate", PropertyValue::DateTime(42)).unwrap();
        gvas.insert(
            "Names",
            PropertyValue::TextArray(vec![encode(Some("a<br>b")), encode(None)]),
        )
        .unwrap();
        gvas.insert(
            "Location",
            PropertyValue::VectorArray(vec![Vector::new(1.0, 2.0, 3.0)]),
        )
        .unwrap();

        let json = gvas.to_json().unwrap();
        let back = Gvas::from_json(&json).unwrap();
        assert_eq!(back, gvas);
        assert_eq!(back.order(), gvas.order());
    }

    #[test]
    fn test_json_rejects_bad_bookkeeping() {
        let mut gvas = Gvas::default();
        gvas.insert("IsNight", PropertyValue::Bool(true)).unwrap();
        let json = gvas.to_json().unwrap().replace("\"IsNight\"\n", "\"Ghost\"\n");
        assert!(matches!(
            Gvas::from_json(&json),
            Err(Error::InvalidStructure(_))
        ));
        assert!(matches!(Gvas::from_json("{"), Err(Error::Json(_))));
    }
}
