//! Plain-language description of a DNS record.

use dnsdash_provider::DnsRecordType;

/// Fully qualified host of a record: the domain itself for `""` and `@`.
pub fn record_host(domain: &str, name: &str) -> String {
    let name = name.trim();
    if name.is_empty() || name == "@" {
        domain.to_string()
    } else {
        format!("{name}.{domain}")
    }
}

/// Describe what a record does in one sentence.
///
/// Returns an empty string for types without a description.
pub fn describe_record(domain: &str, name: &str, value: &str, record_type: &DnsRecordType) -> String {
    let host = record_host(domain, name);
    match record_type {
        DnsRecordType::A => format!("{host} points to the IPv4 address {value}."),
        DnsRecordType::Aaaa => format!("{host} points to the IPv6 address {value}."),
        DnsRecordType::Alias => {
            format!("{host} is an alias of {value}, resolved at the apex by the DNS provider.")
        }
        DnsRecordType::Cname => format!("{host} is an alias of {value}."),
        DnsRecordType::Mx => format!("Mail for {host} is delivered to the mail server {value}."),
        DnsRecordType::Txt => format!("{host} has the text record \"{value}\"."),
        DnsRecordType::Ns => format!("{host} is served by the name server {value}."),
        DnsRecordType::Caa => format!(
            "Only the certificate authorities listed in \"{value}\" may issue certificates for {host}."
        ),
        DnsRecordType::Srv => format!("The service {host} is provided at {value}."),
        DnsRecordType::Https => {
            format!("{host} advertises HTTPS service parameters \"{value}\".")
        }
        DnsRecordType::Other(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apex_names_use_the_domain() {
        assert_eq!(record_host("example.com", ""), "example.com");
        assert_eq!(record_host("example.com", "@"), "example.com");
        assert_eq!(record_host("example.com", "www"), "www.example.com");
    }

    #[test]
    fn a_record_sentence() {
        assert_eq!(
            describe_record("example.com", "api", "192.0.2.1", &DnsRecordType::A),
            "api.example.com points to the IPv4 address 192.0.2.1."
        );
    }

    #[test]
    fn cname_and_alias_sentences() {
        assert_eq!(
            describe_record("example.com", "www", "cname.vercel-dns.com", &DnsRecordType::Cname),
            "www.example.com is an alias of cname.vercel-dns.com."
        );
        assert!(
            describe_record("example.com", "", "cname.vercel-dns.com", &DnsRecordType::Alias)
                .starts_with("example.com is an alias of cname.vercel-dns.com")
        );
    }

    #[test]
    fn mx_and_txt_sentences() {
        assert_eq!(
            describe_record("example.com", "@", "mx1.example.net", &DnsRecordType::Mx),
            "Mail for example.com is delivered to the mail server mx1.example.net."
        );
        assert_eq!(
            describe_record("example.com", "_dmarc", "v=DMARC1", &DnsRecordType::Txt),
            "_dmarc.example.com has the text record \"v=DMARC1\"."
        );
    }

    #[test]
    fn every_known_type_has_a_description() {
        for t in DnsRecordType::ALL {
            assert!(!describe_record("example.com", "x", "v", &t).is_empty(), "{t}");
        }
    }

    #[test]
    fn unknown_type_is_empty() {
        let t = DnsRecordType::Other("LOC".into());
        assert_eq!(describe_record("example.com", "x", "v", &t), "");
    }
}
