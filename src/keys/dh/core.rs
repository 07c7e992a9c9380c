//! Finite-field Diffie-Hellman
//!
//! A [`DiffieHellman`] value holds one party's view of a key agreement over
//! the multiplicative group modulo a prime `p` with generator `g`:
//!
//! ```text
//! private exponent   x            (random, or supplied)
//! public key         y = g^x mod p
//! shared key         s = peer^x mod p
//! ```
//!
//! Two parties using the same `(g, p)` and exchanging public keys arrive at
//! the same shared key. The shared key is turned into symmetric keying
//! material by hashing its canonical little-endian bytes.
//!
//! ## Lifecycle
//!
//! `Created` (private exponent and public key ready) → `PeerKeySet` (shared
//! key ready). Supplying another peer key recomputes the shared key; the
//! last one supplied wins.
//!
//! ## Security
//!
//! - Exponentiation runs a fixed number of iterations and selects with
//!   masks; see [`crate::modular`].
//! - Peer public keys are not validated against small subgroups.
//! - The private exponent and shared key are wiped on drop.

use std::fmt;

use log::debug;
use sha2::Sha512;
use sha2::digest::{Digest, Output};
use zeroize::{Zeroize, Zeroizing};

use crate::Result;
use crate::keys::dh::Group;
use crate::modular::BarrettReducer;
use crate::primitives::Uint;
use crate::rng::{EntropySource, WordSource};

/// Progress of a key agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DhState {
    /// Public key computed, no peer key yet.
    Created,
    /// A peer key has been supplied and the shared key computed.
    PeerKeySet,
}

/// One party of a Diffie-Hellman key agreement over `BITS`-bit integers.
pub struct DiffieHellman<const BITS: usize, const LIMBS: usize> {
    generator: Uint<BITS, LIMBS>,
    reducer: BarrettReducer<BITS, LIMBS>,
    private_exponent: Uint<BITS, LIMBS>,
    public_key: Uint<BITS, LIMBS>,
    shared_key: Option<Uint<BITS, LIMBS>>,
}

impl<const BITS: usize, const LIMBS: usize> DiffieHellman<BITS, LIMBS> {
    /// Starts a key agreement with a private exponent drawn from the
    /// default [`EntropySource`].
    ///
    /// # Errors
    /// - [`crate::Error::ZeroModulus`] if `modulus` is zero
    /// - [`crate::Error::RandomGenerationExhausted`] if the entropy source
    ///   keeps failing
    pub fn new(generator: Uint<BITS, LIMBS>, modulus: Uint<BITS, LIMBS>) -> Result<Self> {
        Self::with_source(generator, modulus, &mut EntropySource::detect())
    }

    /// Starts a key agreement with a private exponent drawn from `source`.
    ///
    /// # Errors
    /// Same as [`DiffieHellman::new`].
    pub fn with_source<S: WordSource + ?Sized>(
        generator: Uint<BITS, LIMBS>,
        modulus: Uint<BITS, LIMBS>,
        source: &mut S,
    ) -> Result<Self> {
        let reducer = BarrettReducer::new(modulus)?;
        let private_exponent = Uint::random(source)?;

        Ok(Self::assemble(generator, reducer, private_exponent))
    }

    /// Starts a key agreement with a caller-supplied private exponent.
    ///
    /// Identical inputs always produce identical public keys.
    ///
    /// # Errors
    /// [`crate::Error::ZeroModulus`] if `modulus` is zero.
    pub fn with_private_exponent(
        generator: Uint<BITS, LIMBS>,
        modulus: Uint<BITS, LIMBS>,
        private_exponent: Uint<BITS, LIMBS>,
    ) -> Result<Self> {
        let reducer = BarrettReducer::new(modulus)?;

        Ok(Self::assemble(generator, reducer, private_exponent))
    }

    /// Starts a key agreement over a named or custom [`Group`].
    ///
    /// # Errors
    /// Same as [`DiffieHellman::new`].
    pub fn from_group(group: &Group<BITS, LIMBS>) -> Result<Self> {
        Self::new(group.generator, group.modulus)
    }

    fn assemble(
        generator: Uint<BITS, LIMBS>,
        reducer: BarrettReducer<BITS, LIMBS>,
        private_exponent: Uint<BITS, LIMBS>,
    ) -> Self {
        debug!("computing {BITS}-bit Diffie-Hellman public key");

        let public_key = generator.pow_mod(&private_exponent, &reducer);

        Self {
            generator,
            reducer,
            private_exponent,
            public_key,
            shared_key: None,
        }
    }

    /// The group generator.
    pub fn generator(&self) -> &Uint<BITS, LIMBS> {
        &self.generator
    }

    /// The group modulus.
    pub fn modulus(&self) -> &Uint<BITS, LIMBS> {
        self.reducer.modulus()
    }

    /// This party's public key, to be sent to the peer.
    pub fn public_key(&self) -> &Uint<BITS, LIMBS> {
        &self.public_key
    }

    /// The shared key, once a peer key has been supplied.
    pub fn shared_key(&self) -> Option<&Uint<BITS, LIMBS>> {
        self.shared_key.as_ref()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DhState {
        match self.shared_key {
            Some(_) => DhState::PeerKeySet,
            None => DhState::Created,
        }
    }

    /// Computes the shared key from the peer's public key.
    ///
    /// Replaces (and wipes) any shared key computed earlier.
    pub fn set_their_public_key(&mut self, peer_public_key: &Uint<BITS, LIMBS>) -> &Uint<BITS, LIMBS> {
        let shared = peer_public_key.pow_mod(&self.private_exponent, &self.reducer);

        if let Some(previous) = self.shared_key.as_mut() {
            previous.zeroize();
        }

        self.shared_key.insert(shared)
    }

    /// SHA-512 digest of the shared key's canonical bytes.
    ///
    /// Returns `None` until a peer key has been supplied.
    pub fn keying_material(&self) -> Option<Output<Sha512>> {
        self.keying_material_with::<Sha512>()
    }

    /// Digest of the shared key's canonical bytes under any hash `D`.
    ///
    /// Returns `None` until a peer key has been supplied.
    pub fn keying_material_with<D: Digest>(&self) -> Option<Output<D>> {
        self.shared_key.as_ref().map(|key| {
            let bytes = Zeroizing::new(key.to_le_bytes());
            D::digest(bytes.as_slice())
        })
    }
}

impl<const BITS: usize, const LIMBS: usize> fmt::Debug for DiffieHellman<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffieHellman")
            .field("generator", &self.generator)
            .field("modulus", self.reducer.modulus())
            .field("private_exponent", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("state", &self.state())
            .finish()
    }
}

impl<const BITS: usize, const LIMBS: usize> Drop for DiffieHellman<BITS, LIMBS> {
    fn drop(&mut self) {
        self.private_exponent.zeroize();

        if let Some(shared) = self.shared_key.as_mut() {
            shared.zeroize();
        }
    }
}
