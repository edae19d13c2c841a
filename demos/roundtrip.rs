use textbook_rsa::{generate_default_key_pair, traits::{PrivateKeyParts, PublicKeyParts}};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::thread_rng();

    // Generate keys
    let (public_key, private_key) = generate_default_key_pair(&mut rng)?.into_parts();
    println!("Public Key (e, n): ({}, {})", public_key.e(), public_key.n());
    println!("Private Key (d, n): ({}, {})", private_key.d(), private_key.n());

    let message = "Hello, RSA Encryption!";
    println!("\nOriginal Message: {}", message);

    let ciphertext = public_key.encrypt(message)?;
    println!("Encrypted: {}", ciphertext);

    let decrypted = private_key.decrypt(&ciphertext)?;
    println!("Decrypted: {}", decrypted);

    Ok(())
}
