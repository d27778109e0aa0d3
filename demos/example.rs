use variants::{args, enumeration, Enum, Error};

enumeration! {
    /// Outcome of a request, carrying whatever detail the caller attaches
    pub struct Status: u16 {
        OK = 200,
        NOT_FOUND = 404,
        TEAPOT = 418,
    }
}

fn main() -> Result<(), Error> {
    // Constructing variants through the generated constructors
    let found = Status::OK(());
    let missing = Status::NOT_FOUND(args!["/index.html", 3]);

    println!("{} = {}", found, found.value());
    println!("{} = {}", missing, missing.value());

    // Same variant, arguments ignored
    assert!(missing.is(&Status::NOT_FOUND(())));
    // Same variant and same arguments
    assert!(!missing.is_exactly(&Status::NOT_FOUND(())));

    // Looking variants up by name or by value
    let teapot = Status::create("TEAPOT", ["short and stout"])?;
    println!("{} is called {}", teapot.value(), Status::name_of(&418)?);
    println!("TEAPOT has the value {}", Status::value_of("TEAPOT")?);

    match Status::create("GONE", ()) {
        Ok(_) => unreachable!(),
        Err(err) => println!("error: {}", err),
    }

    Ok(())
}
