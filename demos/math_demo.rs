use linmath3::{Matrix3, Quaternion, Vector3};

fn print_matrix(title: &str, m: &Matrix3) {
    println!("{title}: ");
    println!("{m}");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut v1 = Vector3::new(3.0, 4.0, 0.0);
    let v2 = Vector3::new(1.0, 2.0, 3.0);

    println!("Vector Addition: {}", v1 + v2);
    println!("Vector Subtraction: {}", v1 - v2);
    println!("Dot Product: {:.3}", v1.dot(&v2));
    println!("Cross Product: {}", v1.cross(&v2));
    println!("Length of v1: {:.3}", v1.length());
    v1.normalize();
    println!("Normalized v1: {v1}");

    let mat1 = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let mat2 = Matrix3::new(9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0);

    print_matrix("Matrix Add Result", &(mat1 + mat2));
    print_matrix("Matrix Multiply Result", &(mat1 * mat2));

    // mat1 is singular, its inverse falls back to zero
    println!("Determinant of mat1: {:.2}", mat1.determinant());
    print_matrix("Inverse of mat1", &mat1.inverse());

    // rotate a triangle corner around z, once with a matrix, once with a quaternion
    let corner = Vector3::new(2.0, -2.0, -5.0);
    println!("Rotated by matrix: {:.7}", Matrix3::rotate_z(5.0) * corner);
    let z_axis = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    println!("Rotated by quaternion: {:.7}", z_axis.rotate_vector(corner, 5.0));

    let transform = Matrix3::scale(200, 50) * Matrix3::rotate(90) * Matrix3::translate(10, 5);
    let point = Vector3::new(1.0, 1.0, 1.0);
    println!("Transformed point: {}", point * transform);
}
