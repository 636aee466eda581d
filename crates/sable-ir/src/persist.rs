use crate::function::Function;
use std::fs;
use std::io;
use std::path::Path;

pub fn save_function(function: &Function, path: impl AsRef<Path>) -> io::Result<()> {
    let json = to_json(function).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_function(path: impl AsRef<Path>) -> io::Result<Function> {
    let json = fs::read_to_string(path)?;
    let function =
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(function)
}

pub fn to_json(function: &Function) -> serde_json::Result<String> {
    serde_json::to_string_pretty(function)
}
