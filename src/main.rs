use qmesh_rs::MeshCell;

fn main() {
    let lat = 35.6895;
    let lon = 139.6917;

    let cell = MeshCell::from_wgs84(&(lat, lon));

    println!("Mesh code: {}", cell.code);
    println!("Coordinate: ({}, {})", cell.lat, cell.lon);
    println!("Structural neighbors: {:?}", cell.neighbors());
    println!("Geometric neighbors: {:?}", cell.geometric_neighbors());
}
