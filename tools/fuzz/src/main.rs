use afl::fuzz;
use iban_identifiers::{
    normalize, ChecksumStrategy, CreateIbanError, Iban, IbanErrorKind, IbanValidator,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn validators() -> [IbanValidator; 2] {
    [
        IbanValidator::default(),
        IbanValidator::builder()
            .checksum_strategy(ChecksumStrategy::FullPrecision)
            .build(),
    ]
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

/// Input layout is `<candidate>,<rng seed>`.
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    run_fuzz(&validators(), input_str, StdRng::seed_from_u64(rng_seed));
    Some(())
}

/// Flips ASCII letters to lowercase and sprinkles spaces between characters.
fn respell(input: &str, rng: &mut StdRng) -> String {
    let mut respelled = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        if rng.gen_bool(0.3) {
            respelled.push(' ');
        }
        if rng.gen_bool(0.5) {
            respelled.push(c.to_ascii_lowercase());
        } else {
            respelled.push(c);
        }
    }
    respelled
}

fn run_fuzz(validators: &[IbanValidator; 2], input: &str, mut rng: StdRng) {
    let [streaming, full_precision] = validators;

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let result = streaming.validate(Some(input));
    assert_eq!(result, full_precision.validate(Some(input)));

    let reasons = streaming.dissatisfaction_reasons(Some(input));
    assert_eq!(result.is_ok(), reasons.is_empty());
    match Iban::create_with(streaming, Some(input)) {
        Ok(iban) => {
            assert_eq!(iban.as_str(), normalize(input));
            assert_eq!(normalize(iban.as_str()), iban.as_str());
            assert_eq!(Iban::create_with(streaming, Some(iban.as_str())), Ok(iban));
        }
        Err(CreateIbanError::ArgumentInvalid { reasons: carried, .. }) => {
            assert_eq!(carried, reasons);
            assert!(!carried.to_string().is_empty());
        }
        Err(CreateIbanError::ArgumentNull) => unreachable!("input was given"),
    }

    if !input.is_empty() {
        let respelled = respell(input, &mut rng);
        #[cfg(feature = "manual_test")]
        println!("Respelled: {:?}", respelled);

        // case and spacing never change the outcome
        let kind = |raw: &str| -> Result<String, IbanErrorKind> {
            streaming.validate(Some(raw)).map_err(|err| err.kind())
        };
        assert_eq!(kind(&respelled), kind(input));
    }
}
