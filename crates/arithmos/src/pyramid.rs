use crate::reduce::{digital_root, reduce};
use concordia_types::PinnaclePyramid;

/// Build the pyramid from raw month, day and year.
pub fn pinnacle_pyramid(month: u32, day: u32, year: u32) -> PinnaclePyramid {
    let a = reduce(month);
    let b = reduce(day);
    let c = reduce(year);

    let d = reduce(a + b);
    let e = reduce(b + c);
    let f = reduce(d + e);
    let g = reduce(a + c);

    let h = reduce(d + f);
    let i = reduce(e + f);
    let j = reduce(f + g);

    // Challenges work on plain roots so masters count by their digit sum
    let (ra, rb, rc) = (digital_root(a), digital_root(b), digital_root(c));
    let k = ra.abs_diff(rb);
    let l = rb.abs_diff(rc);
    let m = k.abs_diff(l);
    let n = ra.abs_diff(rc);

    let o = reduce(d + k);
    let p = reduce(e + l);
    let q = reduce(f + m);
    let r = reduce(o + p);
    let s = reduce(q + r);

    PinnaclePyramid {
        a,
        b,
        c,
        d,
        e,
        f,
        g,
        h,
        i,
        j,
        k,
        l,
        m,
        n,
        o,
        p,
        q,
        r,
        s,
    }
}
