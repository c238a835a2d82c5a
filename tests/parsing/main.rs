mod cursor;
mod errors;
