//! Text-file persistence of a run's sequences.
//!
//! Alice's file is a two-column `Bit\tBase` table, basis files hold one
//! symbol per line under a `Base` header, and raw keys are written as a
//! single 0/1 string. The eavesdropped flow uses `_eve`-suffixed names so
//! the two variants can sit side by side.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use bb84_sim::prelude::*;

/// Write every artifact for the outcome; returns the written paths.
pub fn write_all(dir: &Path, outcome: &SimOutcome) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let tapped = outcome.eve.is_some();
    let mut written = Vec::new();

    let alice = dir.join("alice_bb84.txt");
    write_alice(&alice, &outcome.alice)?;
    written.push(alice);

    if let Some(eve) = &outcome.eve {
        let bases = dir.join("eve_bb84_bases.txt");
        write_bases(&bases, &eve.bases)?;
        written.push(bases);

        let bits = dir.join("eve_measured_bits.txt");
        write_bits_column(&bits, &eve.bits)?;
        written.push(bits);
    }

    let bob = dir.join(if tapped {
        "bob_bb84_bases_eve.txt"
    } else {
        "bob_bb84_bases.txt"
    });
    write_bases(&bob, &outcome.bob.bases)?;
    written.push(bob);

    let (alice_name, bob_name) = if tapped {
        ("raw_key_alice_eve.txt", "raw_key_bob_eve.txt")
    } else {
        ("raw_key_alice.txt", "raw_key_bob.txt")
    };
    let alice_key = dir.join(alice_name);
    write_key(&alice_key, &outcome.raw_key.alice)?;
    written.push(alice_key);

    let bob_key = dir.join(bob_name);
    write_key(&bob_key, &outcome.raw_key.bob)?;
    written.push(bob_key);

    Ok(written)
}

fn write_alice(path: &Path, prep: &Preparation) -> Result<()> {
    let mut out = String::from("Bit\tBase\n");
    for (&bit, basis) in prep.bits.iter().zip(&prep.bases) {
        out.push(bit_char(bit));
        out.push('\t');
        out.push(basis.symbol());
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

fn write_bases(path: &Path, bases: &[Basis]) -> Result<()> {
    let mut out = String::from("Base\n");
    for basis in bases {
        out.push(basis.symbol());
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

fn write_bits_column(path: &Path, bits: &[bool]) -> Result<()> {
    let mut out = String::from("Bit\n");
    for &bit in bits {
        out.push(bit_char(bit));
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

fn write_key(path: &Path, bits: &[bool]) -> Result<()> {
    let mut out: String = bits.iter().map(|&b| bit_char(b)).collect();
    out.push('\n');
    fs::write(path, out)?;
    Ok(())
}

fn bit_char(bit: bool) -> char {
    if bit {
        '1'
    } else {
        '0'
    }
}
