use rand::Rng;

/// Facts shown in the "random fact" box.
pub const FACTS: [&str; 3] = [
    "I have two younger brothers both about a foot taller than me.",
    "My parents are from Vietnam but I don't speak any Vietnamese.",
    "I have never been to anywhere else in Australia except Melbourne, where I was born and raised.",
];

/// Pick one of [`FACTS`] uniformly at random.
pub fn random_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FACTS[rng.gen_range(0..FACTS.len())]
}
