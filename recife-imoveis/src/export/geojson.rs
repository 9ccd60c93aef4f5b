//! Export des imóveis en GeoJSON (couche de points pour la carte)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geo::Geometry;
use geozero::geojson::GeoJsonWriter;
use geozero::GeozeroGeometry;
use proprios::ParcelRecord;
use serde_json::json;

/// Écrit une FeatureCollection (EPSG:4326) avec un point par imóvel
pub fn write_feature_collection<W: Write>(records: &[ParcelRecord], writer: &mut W) -> Result<()> {
    write!(
        writer,
        r#"{{"type":"FeatureCollection","crs":{{"type":"name","properties":{{"name":"urn:ogc:def:crs:EPSG::4326"}}}},"features":["#
    )?;

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write_feature(writer, record)?;
    }

    write!(writer, "]}}")?;
    Ok(())
}

/// Exporte les imóveis dans un fichier GeoJSON
pub fn export_to_geojson(records: &[ParcelRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_feature_collection(records, &mut writer)?;
    writer.flush()?;

    Ok(())
}

fn write_feature<W: Write>(writer: &mut W, record: &ParcelRecord) -> Result<()> {
    write!(writer, r#"{{"type":"Feature","id":"#)?;
    serde_json::to_writer(&mut *writer, &record.id)?;

    // Géométrie via geozero
    write!(writer, r#","geometry":"#)?;
    let mut geom_buf = Vec::new();
    let mut geom_writer = GeoJsonWriter::new(&mut geom_buf);
    Geometry::Point(record.point()).process_geom(&mut geom_writer)?;
    writer.write_all(&geom_buf)?;

    let properties = json!({
        "id": record.id,
        "name": record.name,
        "address": record.address,
        "type": record.parcel_type.as_str(),
        "status": record.status.as_str(),
        "area": record.area,
        "price": record.price,
    });
    write!(writer, r#","properties":"#)?;
    serde_json::to_writer(&mut *writer, &properties)?;
    write!(writer, "}}")?;

    Ok(())
}
