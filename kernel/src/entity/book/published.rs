use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct PublishedAt(OffsetDateTime);

impl PublishedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    /// Calendar year in UTC. Falls back to the local year when the UTC instant
    /// lies outside the supported date range.
    pub fn year(&self) -> i32 {
        utc(self.0).map_or(self.0.year(), |value| value.year())
    }
}

impl Serialize for PublishedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for PublishedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = time::serde::rfc3339::deserialize(deserializer)?;
        utc(value).map(Self).map_err(serde::de::Error::custom)
    }
}

fn utc(value: OffsetDateTime) -> Result<OffsetDateTime, time::error::ComponentRange> {
    OffsetDateTime::from_unix_timestamp_nanos(value.unix_timestamp_nanos())
}

#[cfg(test)]
mod test {
    use super::PublishedAt;
    use time::macros::datetime;

    #[test]
    fn year_is_taken_in_utc() {
        let published = PublishedAt::new(datetime!(2019-12-31 23:30 -02:00));
        assert_eq!(published.year(), 2020);

        let published = PublishedAt::new(datetime!(2018-06-14 0:00 UTC));
        assert_eq!(published.year(), 2018);
    }

    #[test]
    fn deserialize_normalizes_to_utc() {
        let published: PublishedAt =
            serde_json::from_str(r#""2019-12-31T23:30:00-02:00""#).unwrap();
        assert!(published.as_ref().offset().is_utc());
        assert_eq!(published, PublishedAt::new(datetime!(2020-01-01 1:30 UTC)));
    }

    #[test]
    fn out_of_range_instant_is_rejected() {
        let result = serde_json::from_str::<PublishedAt>(r#""9999-12-31T23:00:00-05:00""#);
        assert!(result.is_err());

        let published = PublishedAt::new(datetime!(9999-12-31 23:00 -05:00));
        assert_eq!(published.year(), 9999);
    }
}
