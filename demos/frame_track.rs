//! Frame a few track records the way a feed would render them.
//!
//! Run with: cargo run --example frame_track

use track_viewport::{frame_track, FrameConfig, Track};

fn main() {
    let records = [
        // Recorded route
        r#"{"route": [{"lat": 41.9, "lng": 12.5}, {"lat": 41.91, "lng": 12.51}, {"lat": 41.915, "lng": 12.52}]}"#,
        // Start and end only
        r#"{"startLocation": {"type": "Point", "coordinates": [9.19, 45.46]}, "endLocation": {"lat": 45.48, "lng": 9.21}}"#,
        // Start only
        r#"{"location": {"latitude": 51.5074, "longitude": -0.1278}}"#,
        // Nothing to map
        r#"{"city": "Napoli"}"#,
    ];

    let config = FrameConfig::default();

    println!("Track Framing Examples\n");
    for (i, json) in records.iter().enumerate() {
        let track = match Track::from_json(json) {
            Ok(track) => track,
            Err(e) => {
                println!("{}. Unreadable record: {}\n", i + 1, e);
                continue;
            }
        };

        let frame = frame_track(&track, &config);
        println!("{}. {:?} path with {} points", i + 1, frame.source, frame.path.len());
        match frame.viewport {
            Some(v) => println!(
                "   Center: {:.5}, {:.5}  Span: {:.4} x {:.4}\n",
                v.center.latitude, v.center.longitude, v.latitude_span, v.longitude_span
            ),
            None => println!(
                "   No map, placeholder: {}\n",
                frame.placeholder.as_deref().unwrap_or("-")
            ),
        }
    }
}
