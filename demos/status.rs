use xsp::{Conf, XspErr};

fn main() -> Result<(), XspErr> {
    let server = Conf::create("45.33.24.39");

    println!("{}", server.get_status()?);

    Ok(())
}
