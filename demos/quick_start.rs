//! Build a chain bottom-up, then render and export it.
//!
//! Run with: cargo run --example quick_start

use error_weave::{join, values, wrap, Error};

fn load_config() -> Result<(), Error> {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
    Err(wrap!(Error::foreign(io_err), "reading /etc/app.toml: {}"))
}

fn boot() -> Result<(), Error> {
    let Err(cause) = load_config() else {
        return Ok(());
    };

    Err(join!(
        Error::new("boot aborted"),
        cause,
        Error::value("stage", "config"),
        values! { "attempt" => 1, "host" => "app-01" },
    ))
}

fn main() {
    let err = boot().expect_err("demo always fails");

    println!("compact : {err}");
    println!("quoted  : {}", err.quoted());
    println!("\nverbose:\n{err:#}");

    let info = err.info();
    println!("\nexport record as JSON:");
    println!("{}", serde_json::to_string_pretty(&info).expect("serializable"));
}
