//! CSR entry point for Trunk builds.

fn main() {
    #[cfg(feature = "csr")]
    car_admin::start();
}
