macro_rules! pack_unpack_inverse_test {
    ($name:ident, $thing:expr) => {
        #[test]
        fn $name() {
            fn unpack_like<T: Pack>(_: &T, v: &[u8]) -> (T, Vec<u8>) {
                let (thing, rest) = T::unpack(v).expect("unpacking thing failed");
                (thing, rest.to_vec())
            }

            let thing = $thing;
            let i = thing.pack();
            println!("i (packed): {:x?}", i);
            assert_eq!(i.len(), thing.len());
            let (unpacked, rest) = unpack_like(&thing, &i);
            assert!(rest.is_empty());
            let j = unpacked.pack();
            println!("j (unpked): {:x?}", j);
            assert_eq!(i, j);
        }
    };
}
