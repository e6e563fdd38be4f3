use rand::Rng;

pub fn nextindex() -> u128 {
    let mut rng = rand::thread_rng();
    rng.gen::<u128>()
}
