mod comrak;

pub use self::comrak::create_comrak_options;
