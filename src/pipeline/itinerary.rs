use std::io::Write;

use crate::error::PrintError;
use crate::pipeline::query::upstream_url;
use crate::types::place::{Place, PlannedPlace};

const DEFAULT_DESCRIPTION: &str = "A wonderful place to visit!";
const PHOTO_MAX_WIDTH: &str = "200";

/// Destination for a rendered travel plan (a printer, a file, a response body).
pub trait PrintSink {
    fn print(&mut self, document: &str) -> Result<(), PrintError>;
}

/// Adapts any writer into a [`PrintSink`].
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PrintSink for WriterSink<W> {
    fn print(&mut self, document: &str) -> Result<(), PrintError> {
        self.writer.write_all(document.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl PlannedPlace {
    /// Wishlist entry for a search result. The photo URL is only built when
    /// both a photo and a places key are available.
    pub fn from_place(place: &Place, places_base_url: &str, api_key: Option<&str>) -> Self {
        let image_url = match (place.photos.first(), api_key) {
            (Some(photo), Some(key)) => upstream_url(
                places_base_url,
                "photo",
                &[
                    ("maxwidth", PHOTO_MAX_WIDTH),
                    ("photoreference", photo.photo_reference.as_str()),
                    ("key", key),
                ],
            ),
            _ => String::new(),
        };

        Self {
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            address: place.formatted_address.clone(),
            image_url,
            description: DEFAULT_DESCRIPTION.to_string(),
            location: place.geometry.location,
        }
    }
}

pub fn render_plan(places: &[PlannedPlace]) -> String {
    let mut out = String::from("Your Travel Wishlist\n");
    out.push_str(&"=".repeat(20));
    out.push('\n');

    for (idx, place) in places.iter().enumerate() {
        out.push_str(&format!("\n{}. {}\n", idx + 1, place.name));
        if !place.address.is_empty() {
            out.push_str(&format!("   {}\n", place.address));
        }
        if !place.description.is_empty() {
            out.push_str(&format!("   {}\n", place.description));
        }
        out.push_str(&format!(
            "   ({:.5}, {:.5})\n",
            place.location.lat, place.location.lng
        ));
    }
    out
}

/// Renders the plan and hands it to `sink`. An empty wishlist is not printed.
pub fn print_plan<S: PrintSink + ?Sized>(
    places: &[PlannedPlace],
    sink: &mut S,
) -> Result<(), PrintError> {
    if places.is_empty() {
        return Err(PrintError::EmptyPlan);
    }
    sink.print(&render_plan(places))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::place::{Geometry, LatLng, Photo};

    fn place(photo: Option<&str>) -> Place {
        Place {
            place_id: Some("abc".to_string()),
            name: "Belem Tower".to_string(),
            formatted_address: "Av. Brasilia, Lisbon".to_string(),
            geometry: Geometry {
                location: LatLng { lat: 38.6916, lng: -9.216 },
            },
            photos: photo
                .map(|r| vec![Photo { photo_reference: r.to_string() }])
                .unwrap_or_default(),
        }
    }

    #[test]
    fn planned_place_carries_photo_url() {
        let planned = PlannedPlace::from_place(
            &place(Some("ref123")),
            "https://maps.example.com/place",
            Some("k"),
        );
        assert_eq!(
            planned.image_url,
            "https://maps.example.com/place/photo?maxwidth=200&photoreference=ref123&key=k"
        );
        assert_eq!(planned.description, "A wonderful place to visit!");
        assert_eq!(planned.address, "Av. Brasilia, Lisbon");
    }

    #[test]
    fn planned_place_without_photo_has_no_image() {
        let planned = PlannedPlace::from_place(&place(None), "https://m", Some("k"));
        assert!(planned.image_url.is_empty());
        let planned = PlannedPlace::from_place(&place(Some("r")), "https://m", None);
        assert!(planned.image_url.is_empty());
    }

    #[test]
    fn prints_numbered_plan_through_sink() {
        let planned = PlannedPlace::from_place(&place(None), "https://m", None);
        let mut sink = WriterSink::new(Vec::new());
        print_plan(&[planned], &mut sink).expect("print");
        let text = String::from_utf8(sink.into_inner()).expect("utf8");
        assert!(text.starts_with("Your Travel Wishlist\n"));
        assert!(text.contains("1. Belem Tower"));
        assert!(text.contains("(38.69160, -9.21600)"));
    }

    #[test]
    fn empty_plan_is_not_printed() {
        let mut sink = WriterSink::new(Vec::new());
        let err = print_plan(&[], &mut sink).unwrap_err();
        assert!(matches!(err, PrintError::EmptyPlan));
        assert!(sink.into_inner().is_empty());
    }
}
