mod geojson;
mod json;
