use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use cosmos_llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use cosmos_prompts::{InstructionLoader, DEFAULT_INSTRUCTIONS_PATH};

#[derive(Parser)]
#[command(name = "cosmos-server", about = "Cosmos Canvas chat server")]
pub struct ServerConfig {
    /// Gemini API key. Required; there is no built-in fallback.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generative language API
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub gemini_base_url: String,

    /// Address to bind
    #[arg(long, env = "COSMOS_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Directory holding the per-mode instruction templates
    #[arg(long, env = "COSMOS_INSTRUCTIONS_DIR", default_value = "instructions")]
    pub instructions_dir: PathBuf,

    /// Template used when no mode keyword matches
    #[arg(long, env = "COSMOS_DEFAULT_INSTRUCTIONS", default_value = DEFAULT_INSTRUCTIONS_PATH)]
    pub default_instructions: PathBuf,

    /// Directory served as static files (`demo.html` at `/`)
    #[arg(long, env = "COSMOS_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Reject configurations that would only fail later, per request.
    pub fn validate(&self) -> Result<()> {
        if self.gemini_api_key.trim().is_empty() {
            bail!("GEMINI_API_KEY is empty; set it to a valid Gemini API key");
        }
        Ok(())
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        Ok(SocketAddr::new(self.bind.parse()?, self.port))
    }

    pub fn loader(&self) -> InstructionLoader {
        InstructionLoader::new(&self.instructions_dir).with_default_path(&self.default_instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmos_core::Mode;

    fn parse(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["cosmos-server"];
        argv.extend_from_slice(args);
        ServerConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_flags() {
        let c = parse(&[
            "--gemini-api-key",
            "k",
            "--bind",
            "127.0.0.1",
            "--port",
            "9001",
            "--instructions-dir",
            "/srv/instr",
            "--default-instructions",
            "/srv/default.txt",
        ]);
        c.validate().unwrap();
        assert_eq!(c.addr().unwrap(), "127.0.0.1:9001".parse().unwrap());
        let loader = c.loader();
        assert_eq!(loader.path_for(Mode::Default), PathBuf::from("/srv/default.txt"));
        assert_eq!(
            loader.path_for(Mode::Advanced),
            PathBuf::from("/srv/instr/instructions_advanced.txt")
        );
    }

    #[test]
    fn defaults() {
        let c = parse(&["--gemini-api-key", "k"]);
        if std::env::var_os("PORT").is_none() {
            assert_eq!(c.port, 8000);
        }
        if std::env::var_os("GEMINI_MODEL").is_none() {
            assert_eq!(c.model, DEFAULT_MODEL);
        }
        if std::env::var_os("COSMOS_DEFAULT_INSTRUCTIONS").is_none() {
            assert_eq!(c.default_instructions, PathBuf::from(DEFAULT_INSTRUCTIONS_PATH));
        }
    }

    #[test]
    fn blank_api_key_rejected() {
        let c = parse(&["--gemini-api-key", "   "]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn bad_bind_address() {
        let c = parse(&["--gemini-api-key", "k", "--bind", "not-an-ip"]);
        assert!(c.addr().is_err());
    }
}
