//! The catalog of well-known object identifiers.
//!
//! Every entry is a named [`Oid`] constant, initialized once on first use
//! and read-only afterwards. The catalog feeds the name resolution of
//! [`Oid::new`](crate::oid::Oid::new): an identifier equal to a catalog
//! entry displays the catalog name instead of its dot notation.
//!
//! The catalog covers what the surrounding card and certificate layers
//! consume: hash algorithms, RSA and ECDSA signature algorithms, elliptic
//! curve domain parameters, AES modes, X.509 certificate extensions and
//! attribute types, CMS content types, PKIX access descriptors and the
//! BSI TR-03110 protocol tree used by card-verifiable certificates.
//!
//! Cross-entry uniqueness (no duplicate value, display name or dot string)
//! is validated by the test suite, not enforced at runtime.

use crate::oid::Oid;

macro_rules! known_oids {
    ($($(#[$attr:meta])* $ident:ident => $name:literal, [$($component:expr),+ $(,)?];)+) => {
        lazy_static::lazy_static! {
            $(
                $(#[$attr])*
                pub static ref $ident: Oid = Oid::well_known($name, &[$($component),+]);
            )+

            static ref CATALOG: Vec<&'static Oid> = vec![$(&*$ident),+];
        }
    };
}

/// Enumerates every named identifier in the catalog, in declaration order.
pub fn all_known() -> impl Iterator<Item = &'static Oid> {
    CATALOG.iter().copied()
}

/// Scans the catalog for an entry whose canonical octet string matches.
/// The catalog is read-only, so concurrent scans need no coordination.
pub(crate) fn resolve_name(octet_string: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|known| known.octet_string() == octet_string)
        .map(|known| known.name())
}

known_oids! {
    // hash algorithms

    MD5 => "md5", [1, 2, 840, 113549, 2, 5];
    SHA1 => "sha1", [1, 3, 14, 3, 2, 26];
    RIPEMD160 => "ripemd160", [1, 3, 36, 3, 2, 1];
    SHA256 => "sha256", [2, 16, 840, 1, 101, 3, 4, 2, 1];
    SHA384 => "sha384", [2, 16, 840, 1, 101, 3, 4, 2, 2];
    SHA512 => "sha512", [2, 16, 840, 1, 101, 3, 4, 2, 3];
    SHA224 => "sha224", [2, 16, 840, 1, 101, 3, 4, 2, 4];
    SHA512_224 => "sha512-224", [2, 16, 840, 1, 101, 3, 4, 2, 5];
    SHA512_256 => "sha512-256", [2, 16, 840, 1, 101, 3, 4, 2, 6];
    SHA3_224 => "sha3-224", [2, 16, 840, 1, 101, 3, 4, 2, 7];
    SHA3_256 => "sha3-256", [2, 16, 840, 1, 101, 3, 4, 2, 8];
    SHA3_384 => "sha3-384", [2, 16, 840, 1, 101, 3, 4, 2, 9];
    SHA3_512 => "sha3-512", [2, 16, 840, 1, 101, 3, 4, 2, 10];

    // PKCS#1 / RSA

    /// Identifies an RSA public key without restricting it to a scheme.
    RSA_ENCRYPTION => "rsaEncryption", [1, 2, 840, 113549, 1, 1, 1];
    MD5_WITH_RSA_ENCRYPTION => "md5WithRSAEncryption", [1, 2, 840, 113549, 1, 1, 4];
    SHA1_WITH_RSA_ENCRYPTION => "sha1WithRSAEncryption", [1, 2, 840, 113549, 1, 1, 5];
    RSAES_OAEP => "id-RSAES-OAEP", [1, 2, 840, 113549, 1, 1, 7];
    MGF1 => "id-mgf1", [1, 2, 840, 113549, 1, 1, 8];
    RSASSA_PSS => "id-RSASSA-PSS", [1, 2, 840, 113549, 1, 1, 10];
    SHA256_WITH_RSA_ENCRYPTION => "sha256WithRSAEncryption", [1, 2, 840, 113549, 1, 1, 11];
    SHA384_WITH_RSA_ENCRYPTION => "sha384WithRSAEncryption", [1, 2, 840, 113549, 1, 1, 12];
    SHA512_WITH_RSA_ENCRYPTION => "sha512WithRSAEncryption", [1, 2, 840, 113549, 1, 1, 13];
    SHA224_WITH_RSA_ENCRYPTION => "sha224WithRSAEncryption", [1, 2, 840, 113549, 1, 1, 14];

    // X9.42 / X9.62

    DH_PUBLIC_NUMBER => "dhpublicnumber", [1, 2, 840, 10046, 2, 1];
    PRIME_FIELD => "prime-field", [1, 2, 840, 10045, 1, 1];
    CHARACTERISTIC_TWO_FIELD => "characteristic-two-field", [1, 2, 840, 10045, 1, 2];
    /// Identifies an elliptic curve public key, with the curve named by the
    /// domain parameters.
    EC_PUBLIC_KEY => "id-ecPublicKey", [1, 2, 840, 10045, 2, 1];
    ECDSA_WITH_SHA1 => "ecdsa-with-SHA1", [1, 2, 840, 10045, 4, 1];
    ECDSA_WITH_SHA224 => "ecdsa-with-SHA224", [1, 2, 840, 10045, 4, 3, 1];
    ECDSA_WITH_SHA256 => "ecdsa-with-SHA256", [1, 2, 840, 10045, 4, 3, 2];
    ECDSA_WITH_SHA384 => "ecdsa-with-SHA384", [1, 2, 840, 10045, 4, 3, 3];
    ECDSA_WITH_SHA512 => "ecdsa-with-SHA512", [1, 2, 840, 10045, 4, 3, 4];

    // elliptic curve domain parameters

    PRIME192V1 => "prime192v1", [1, 2, 840, 10045, 3, 1, 1];
    PRIME239V1 => "prime239v1", [1, 2, 840, 10045, 3, 1, 4];
    PRIME256V1 => "prime256v1", [1, 2, 840, 10045, 3, 1, 7];
    SECP160R1 => "secp160r1", [1, 3, 132, 0, 8];
    SECP160K1 => "secp160k1", [1, 3, 132, 0, 9];
    SECP256K1 => "secp256k1", [1, 3, 132, 0, 10];
    SECP160R2 => "secp160r2", [1, 3, 132, 0, 30];
    SECP192K1 => "secp192k1", [1, 3, 132, 0, 31];
    SECP224K1 => "secp224k1", [1, 3, 132, 0, 32];
    SECP224R1 => "secp224r1", [1, 3, 132, 0, 33];
    SECP384R1 => "secp384r1", [1, 3, 132, 0, 34];
    SECP521R1 => "secp521r1", [1, 3, 132, 0, 35];
    BRAINPOOL_P160R1 => "brainpoolP160r1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 1];
    BRAINPOOL_P160T1 => "brainpoolP160t1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 2];
    BRAINPOOL_P192R1 => "brainpoolP192r1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 3];
    BRAINPOOL_P192T1 => "brainpoolP192t1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 4];
    BRAINPOOL_P224R1 => "brainpoolP224r1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 5];
    BRAINPOOL_P224T1 => "brainpoolP224t1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 6];
    BRAINPOOL_P256R1 => "brainpoolP256r1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 7];
    BRAINPOOL_P256T1 => "brainpoolP256t1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 8];
    BRAINPOOL_P320R1 => "brainpoolP320r1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 9];
    BRAINPOOL_P320T1 => "brainpoolP320t1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 10];
    BRAINPOOL_P384R1 => "brainpoolP384r1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 11];
    BRAINPOOL_P384T1 => "brainpoolP384t1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 12];
    BRAINPOOL_P512R1 => "brainpoolP512r1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 13];
    BRAINPOOL_P512T1 => "brainpoolP512t1", [1, 3, 36, 3, 3, 2, 8, 1, 1, 14];

    // AES

    AES128_ECB => "id-aes128-ECB", [2, 16, 840, 1, 101, 3, 4, 1, 1];
    AES128_CBC => "id-aes128-CBC", [2, 16, 840, 1, 101, 3, 4, 1, 2];
    AES128_WRAP => "id-aes128-wrap", [2, 16, 840, 1, 101, 3, 4, 1, 5];
    AES128_GCM => "id-aes128-GCM", [2, 16, 840, 1, 101, 3, 4, 1, 6];
    AES192_ECB => "id-aes192-ECB", [2, 16, 840, 1, 101, 3, 4, 1, 21];
    AES192_CBC => "id-aes192-CBC", [2, 16, 840, 1, 101, 3, 4, 1, 22];
    AES192_WRAP => "id-aes192-wrap", [2, 16, 840, 1, 101, 3, 4, 1, 25];
    AES192_GCM => "id-aes192-GCM", [2, 16, 840, 1, 101, 3, 4, 1, 26];
    AES256_ECB => "id-aes256-ECB", [2, 16, 840, 1, 101, 3, 4, 1, 41];
    AES256_CBC => "id-aes256-CBC", [2, 16, 840, 1, 101, 3, 4, 1, 42];
    AES256_WRAP => "id-aes256-wrap", [2, 16, 840, 1, 101, 3, 4, 1, 45];
    AES256_GCM => "id-aes256-GCM", [2, 16, 840, 1, 101, 3, 4, 1, 46];

    // X.509 certificate extensions

    SUBJECT_DIRECTORY_ATTRIBUTES => "id-ce-subjectDirectoryAttributes", [2, 5, 29, 9];
    SUBJECT_KEY_IDENTIFIER => "id-ce-subjectKeyIdentifier", [2, 5, 29, 14];
    KEY_USAGE => "id-ce-keyUsage", [2, 5, 29, 15];
    PRIVATE_KEY_USAGE_PERIOD => "id-ce-privateKeyUsagePeriod", [2, 5, 29, 16];
    SUBJECT_ALT_NAME => "id-ce-subjectAltName", [2, 5, 29, 17];
    ISSUER_ALT_NAME => "id-ce-issuerAltName", [2, 5, 29, 18];
    BASIC_CONSTRAINTS => "id-ce-basicConstraints", [2, 5, 29, 19];
    CRL_NUMBER => "id-ce-cRLNumber", [2, 5, 29, 20];
    CRL_DISTRIBUTION_POINTS => "id-ce-cRLDistributionPoints", [2, 5, 29, 31];
    CERTIFICATE_POLICIES => "id-ce-certificatePolicies", [2, 5, 29, 32];
    POLICY_MAPPINGS => "id-ce-policyMappings", [2, 5, 29, 33];
    AUTHORITY_KEY_IDENTIFIER => "id-ce-authorityKeyIdentifier", [2, 5, 29, 35];
    POLICY_CONSTRAINTS => "id-ce-policyConstraints", [2, 5, 29, 36];
    EXT_KEY_USAGE => "id-ce-extKeyUsage", [2, 5, 29, 37];
    FRESHEST_CRL => "id-ce-freshestCRL", [2, 5, 29, 46];
    INHIBIT_ANY_POLICY => "id-ce-inhibitAnyPolicy", [2, 5, 29, 54];

    // X.520 attribute types

    COMMON_NAME => "id-at-commonName", [2, 5, 4, 3];
    SURNAME => "id-at-surname", [2, 5, 4, 4];
    SERIAL_NUMBER => "id-at-serialNumber", [2, 5, 4, 5];
    COUNTRY_NAME => "id-at-countryName", [2, 5, 4, 6];
    LOCALITY_NAME => "id-at-localityName", [2, 5, 4, 7];
    STATE_OR_PROVINCE_NAME => "id-at-stateOrProvinceName", [2, 5, 4, 8];
    ORGANIZATION_NAME => "id-at-organizationName", [2, 5, 4, 10];
    ORGANIZATIONAL_UNIT_NAME => "id-at-organizationalUnitName", [2, 5, 4, 11];
    TITLE => "id-at-title", [2, 5, 4, 12];
    GIVEN_NAME => "id-at-givenName", [2, 5, 4, 42];
    PSEUDONYM => "id-at-pseudonym", [2, 5, 4, 65];

    // PKCS#9 attributes

    EMAIL_ADDRESS => "emailAddress", [1, 2, 840, 113549, 1, 9, 1];
    CONTENT_TYPE => "id-contentType", [1, 2, 840, 113549, 1, 9, 3];
    MESSAGE_DIGEST => "id-messageDigest", [1, 2, 840, 113549, 1, 9, 4];
    SIGNING_TIME => "id-signingTime", [1, 2, 840, 113549, 1, 9, 5];

    // CMS content types

    DATA => "id-data", [1, 2, 840, 113549, 1, 7, 1];
    SIGNED_DATA => "id-signedData", [1, 2, 840, 113549, 1, 7, 2];
    ENVELOPED_DATA => "id-envelopedData", [1, 2, 840, 113549, 1, 7, 3];
    DIGESTED_DATA => "id-digestedData", [1, 2, 840, 113549, 1, 7, 5];
    ENCRYPTED_DATA => "id-encryptedData", [1, 2, 840, 113549, 1, 7, 6];

    // PKIX

    AUTHORITY_INFO_ACCESS => "id-pe-authorityInfoAccess", [1, 3, 6, 1, 5, 5, 7, 1, 1];
    SUBJECT_INFO_ACCESS => "id-pe-subjectInfoAccess", [1, 3, 6, 1, 5, 5, 7, 1, 11];
    KP_SERVER_AUTH => "id-kp-serverAuth", [1, 3, 6, 1, 5, 5, 7, 3, 1];
    KP_CLIENT_AUTH => "id-kp-clientAuth", [1, 3, 6, 1, 5, 5, 7, 3, 2];
    KP_CODE_SIGNING => "id-kp-codeSigning", [1, 3, 6, 1, 5, 5, 7, 3, 3];
    KP_EMAIL_PROTECTION => "id-kp-emailProtection", [1, 3, 6, 1, 5, 5, 7, 3, 4];
    KP_TIME_STAMPING => "id-kp-timeStamping", [1, 3, 6, 1, 5, 5, 7, 3, 8];
    KP_OCSP_SIGNING => "id-kp-OCSPSigning", [1, 3, 6, 1, 5, 5, 7, 3, 9];
    AD_OCSP => "id-ad-ocsp", [1, 3, 6, 1, 5, 5, 7, 48, 1];
    AD_CA_ISSUERS => "id-ad-caIssuers", [1, 3, 6, 1, 5, 5, 7, 48, 2];
    AD_TIME_STAMPING => "id-ad-timeStamping", [1, 3, 6, 1, 5, 5, 7, 48, 3];
    AD_CA_REPOSITORY => "id-ad-caRepository", [1, 3, 6, 1, 5, 5, 7, 48, 5];

    // TeleTrusT plain-format ECDSA signatures, TR-03111

    ECC => "id-ecc", [0, 4, 0, 127, 0, 7, 1, 1];
    ECDSA_PLAIN_SHA1 => "ecdsa-plain-SHA1", [0, 4, 0, 127, 0, 7, 1, 1, 4, 1, 1];
    ECDSA_PLAIN_SHA224 => "ecdsa-plain-SHA224", [0, 4, 0, 127, 0, 7, 1, 1, 4, 1, 2];
    ECDSA_PLAIN_SHA256 => "ecdsa-plain-SHA256", [0, 4, 0, 127, 0, 7, 1, 1, 4, 1, 3];
    ECDSA_PLAIN_SHA384 => "ecdsa-plain-SHA384", [0, 4, 0, 127, 0, 7, 1, 1, 4, 1, 4];
    ECDSA_PLAIN_SHA512 => "ecdsa-plain-SHA512", [0, 4, 0, 127, 0, 7, 1, 1, 4, 1, 5];
    ECDSA_PLAIN_RIPEMD160 => "ecdsa-plain-RIPEMD160", [0, 4, 0, 127, 0, 7, 1, 1, 4, 1, 6];

    // BSI TR-03110: public key formats

    PK => "id-PK", [0, 4, 0, 127, 0, 7, 2, 2, 1];
    PK_DH => "id-PK-DH", [0, 4, 0, 127, 0, 7, 2, 2, 1, 1];
    PK_ECDH => "id-PK-ECDH", [0, 4, 0, 127, 0, 7, 2, 2, 1, 2];

    // BSI TR-03110: terminal authentication

    TA => "id-TA", [0, 4, 0, 127, 0, 7, 2, 2, 2];
    TA_RSA => "id-TA-RSA", [0, 4, 0, 127, 0, 7, 2, 2, 2, 1];
    TA_RSA_V1_5_SHA_1 => "id-TA-RSA-v1-5-SHA-1", [0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 1];
    TA_RSA_V1_5_SHA_256 => "id-TA-RSA-v1-5-SHA-256", [0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 2];
    TA_RSA_PSS_SHA_1 => "id-TA-RSA-PSS-SHA-1", [0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 3];
    TA_RSA_PSS_SHA_256 => "id-TA-RSA-PSS-SHA-256", [0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 4];
    TA_RSA_V1_5_SHA_512 => "id-TA-RSA-v1-5-SHA-512", [0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 5];
    TA_RSA_PSS_SHA_512 => "id-TA-RSA-PSS-SHA-512", [0, 4, 0, 127, 0, 7, 2, 2, 2, 1, 6];
    TA_ECDSA => "id-TA-ECDSA", [0, 4, 0, 127, 0, 7, 2, 2, 2, 2];
    TA_ECDSA_SHA_1 => "id-TA-ECDSA-SHA-1", [0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 1];
    TA_ECDSA_SHA_224 => "id-TA-ECDSA-SHA-224", [0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 2];
    TA_ECDSA_SHA_256 => "id-TA-ECDSA-SHA-256", [0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 3];
    TA_ECDSA_SHA_384 => "id-TA-ECDSA-SHA-384", [0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 4];
    TA_ECDSA_SHA_512 => "id-TA-ECDSA-SHA-512", [0, 4, 0, 127, 0, 7, 2, 2, 2, 2, 5];

    // BSI TR-03110: chip authentication

    CA => "id-CA", [0, 4, 0, 127, 0, 7, 2, 2, 3];
    CA_DH => "id-CA-DH", [0, 4, 0, 127, 0, 7, 2, 2, 3, 1];
    CA_DH_3DES_CBC_CBC => "id-CA-DH-3DES-CBC-CBC", [0, 4, 0, 127, 0, 7, 2, 2, 3, 1, 1];
    CA_DH_AES_CBC_CMAC_128 => "id-CA-DH-AES-CBC-CMAC-128", [0, 4, 0, 127, 0, 7, 2, 2, 3, 1, 2];
    CA_DH_AES_CBC_CMAC_192 => "id-CA-DH-AES-CBC-CMAC-192", [0, 4, 0, 127, 0, 7, 2, 2, 3, 1, 3];
    CA_DH_AES_CBC_CMAC_256 => "id-CA-DH-AES-CBC-CMAC-256", [0, 4, 0, 127, 0, 7, 2, 2, 3, 1, 4];
    CA_ECDH => "id-CA-ECDH", [0, 4, 0, 127, 0, 7, 2, 2, 3, 2];
    CA_ECDH_3DES_CBC_CBC => "id-CA-ECDH-3DES-CBC-CBC", [0, 4, 0, 127, 0, 7, 2, 2, 3, 2, 1];
    CA_ECDH_AES_CBC_CMAC_128 => "id-CA-ECDH-AES-CBC-CMAC-128", [0, 4, 0, 127, 0, 7, 2, 2, 3, 2, 2];
    CA_ECDH_AES_CBC_CMAC_192 => "id-CA-ECDH-AES-CBC-CMAC-192", [0, 4, 0, 127, 0, 7, 2, 2, 3, 2, 3];
    CA_ECDH_AES_CBC_CMAC_256 => "id-CA-ECDH-AES-CBC-CMAC-256", [0, 4, 0, 127, 0, 7, 2, 2, 3, 2, 4];

    // BSI TR-03110: PACE

    PACE => "id-PACE", [0, 4, 0, 127, 0, 7, 2, 2, 4];
    PACE_DH_GM => "id-PACE-DH-GM", [0, 4, 0, 127, 0, 7, 2, 2, 4, 1];
    PACE_DH_GM_3DES_CBC_CBC => "id-PACE-DH-GM-3DES-CBC-CBC", [0, 4, 0, 127, 0, 7, 2, 2, 4, 1, 1];
    PACE_DH_GM_AES_CBC_CMAC_128 => "id-PACE-DH-GM-AES-CBC-CMAC-128", [0, 4, 0, 127, 0, 7, 2, 2, 4, 1, 2];
    PACE_DH_GM_AES_CBC_CMAC_192 => "id-PACE-DH-GM-AES-CBC-CMAC-192", [0, 4, 0, 127, 0, 7, 2, 2, 4, 1, 3];
    PACE_DH_GM_AES_CBC_CMAC_256 => "id-PACE-DH-GM-AES-CBC-CMAC-256", [0, 4, 0, 127, 0, 7, 2, 2, 4, 1, 4];
    PACE_ECDH_GM => "id-PACE-ECDH-GM", [0, 4, 0, 127, 0, 7, 2, 2, 4, 2];
    PACE_ECDH_GM_3DES_CBC_CBC => "id-PACE-ECDH-GM-3DES-CBC-CBC", [0, 4, 0, 127, 0, 7, 2, 2, 4, 2, 1];
    PACE_ECDH_GM_AES_CBC_CMAC_128 => "id-PACE-ECDH-GM-AES-CBC-CMAC-128", [0, 4, 0, 127, 0, 7, 2, 2, 4, 2, 2];
    PACE_ECDH_GM_AES_CBC_CMAC_192 => "id-PACE-ECDH-GM-AES-CBC-CMAC-192", [0, 4, 0, 127, 0, 7, 2, 2, 4, 2, 3];
    PACE_ECDH_GM_AES_CBC_CMAC_256 => "id-PACE-ECDH-GM-AES-CBC-CMAC-256", [0, 4, 0, 127, 0, 7, 2, 2, 4, 2, 4];
    PACE_DH_IM => "id-PACE-DH-IM", [0, 4, 0, 127, 0, 7, 2, 2, 4, 3];
    PACE_DH_IM_3DES_CBC_CBC => "id-PACE-DH-IM-3DES-CBC-CBC", [0, 4, 0, 127, 0, 7, 2, 2, 4, 3, 1];
    PACE_DH_IM_AES_CBC_CMAC_128 => "id-PACE-DH-IM-AES-CBC-CMAC-128", [0, 4, 0, 127, 0, 7, 2, 2, 4, 3, 2];
    PACE_DH_IM_AES_CBC_CMAC_192 => "id-PACE-DH-IM-AES-CBC-CMAC-192", [0, 4, 0, 127, 0, 7, 2, 2, 4, 3, 3];
    PACE_DH_IM_AES_CBC_CMAC_256 => "id-PACE-DH-IM-AES-CBC-CMAC-256", [0, 4, 0, 127, 0, 7, 2, 2, 4, 3, 4];
    PACE_ECDH_IM => "id-PACE-ECDH-IM", [0, 4, 0, 127, 0, 7, 2, 2, 4, 4];
    PACE_ECDH_IM_3DES_CBC_CBC => "id-PACE-ECDH-IM-3DES-CBC-CBC", [0, 4, 0, 127, 0, 7, 2, 2, 4, 4, 1];
    PACE_ECDH_IM_AES_CBC_CMAC_128 => "id-PACE-ECDH-IM-AES-CBC-CMAC-128", [0, 4, 0, 127, 0, 7, 2, 2, 4, 4, 2];
    PACE_ECDH_IM_AES_CBC_CMAC_192 => "id-PACE-ECDH-IM-AES-CBC-CMAC-192", [0, 4, 0, 127, 0, 7, 2, 2, 4, 4, 3];
    PACE_ECDH_IM_AES_CBC_CMAC_256 => "id-PACE-ECDH-IM-AES-CBC-CMAC-256", [0, 4, 0, 127, 0, 7, 2, 2, 4, 4, 4];
    PACE_ECDH_CAM => "id-PACE-ECDH-CAM", [0, 4, 0, 127, 0, 7, 2, 2, 4, 6];
    PACE_ECDH_CAM_AES_CBC_CMAC_128 => "id-PACE-ECDH-CAM-AES-CBC-CMAC-128", [0, 4, 0, 127, 0, 7, 2, 2, 4, 6, 2];
    PACE_ECDH_CAM_AES_CBC_CMAC_192 => "id-PACE-ECDH-CAM-AES-CBC-CMAC-192", [0, 4, 0, 127, 0, 7, 2, 2, 4, 6, 3];
    PACE_ECDH_CAM_AES_CBC_CMAC_256 => "id-PACE-ECDH-CAM-AES-CBC-CMAC-256", [0, 4, 0, 127, 0, 7, 2, 2, 4, 6, 4];

    // BSI TR-03110: restricted identification

    RI => "id-RI", [0, 4, 0, 127, 0, 7, 2, 2, 5];
    RI_DH => "id-RI-DH", [0, 4, 0, 127, 0, 7, 2, 2, 5, 1];
    RI_DH_SHA_1 => "id-RI-DH-SHA-1", [0, 4, 0, 127, 0, 7, 2, 2, 5, 1, 1];
    RI_DH_SHA_224 => "id-RI-DH-SHA-224", [0, 4, 0, 127, 0, 7, 2, 2, 5, 1, 2];
    RI_DH_SHA_256 => "id-RI-DH-SHA-256", [0, 4, 0, 127, 0, 7, 2, 2, 5, 1, 3];
    RI_ECDH => "id-RI-ECDH", [0, 4, 0, 127, 0, 7, 2, 2, 5, 2];
    RI_ECDH_SHA_1 => "id-RI-ECDH-SHA-1", [0, 4, 0, 127, 0, 7, 2, 2, 5, 2, 1];
    RI_ECDH_SHA_224 => "id-RI-ECDH-SHA-224", [0, 4, 0, 127, 0, 7, 2, 2, 5, 2, 2];
    RI_ECDH_SHA_256 => "id-RI-ECDH-SHA-256", [0, 4, 0, 127, 0, 7, 2, 2, 5, 2, 3];

    // BSI TR-03110: further protocol identifiers

    CARD_INFO => "id-CI", [0, 4, 0, 127, 0, 7, 2, 2, 6];
    EID_SECURITY => "id-eIDSecurity", [0, 4, 0, 127, 0, 7, 2, 2, 7];
    PRIVILEGED_TERMINAL => "id-PT", [0, 4, 0, 127, 0, 7, 2, 2, 8];

    // BSI TR-03110: certificate holder roles

    ROLES => "id-roles", [0, 4, 0, 127, 0, 7, 3, 1, 2];
    ROLE_IS => "id-IS", [0, 4, 0, 127, 0, 7, 3, 1, 2, 1];
    ROLE_AT => "id-AT", [0, 4, 0, 127, 0, 7, 3, 1, 2, 2];
    ROLE_ST => "id-ST", [0, 4, 0, 127, 0, 7, 3, 1, 2, 3];

    // BSI TR-03110: certificate extensions

    CV_EXTENSIONS => "id-extensions", [0, 4, 0, 127, 0, 7, 3, 1, 3];
    DESCRIPTION => "id-description", [0, 4, 0, 127, 0, 7, 3, 1, 3, 1];
    DESCRIPTION_PLAIN => "id-plainFormat", [0, 4, 0, 127, 0, 7, 3, 1, 3, 1, 1];
    DESCRIPTION_HTML => "id-htmlFormat", [0, 4, 0, 127, 0, 7, 3, 1, 3, 1, 2];
    DESCRIPTION_PDF => "id-pdfFormat", [0, 4, 0, 127, 0, 7, 3, 1, 3, 1, 3];
    SECTOR => "id-sector", [0, 4, 0, 127, 0, 7, 3, 1, 3, 2];

    // BSI TR-03110: auxiliary data verification

    AUXILIARY_DATA => "id-AuxiliaryData", [0, 4, 0, 127, 0, 7, 3, 1, 4];
    DATE_OF_BIRTH => "id-DateOfBirth", [0, 4, 0, 127, 0, 7, 3, 1, 4, 1];
    DATE_OF_EXPIRY => "id-DateOfExpiry", [0, 4, 0, 127, 0, 7, 3, 1, 4, 2];
    COMMUNITY_ID => "id-CommunityID", [0, 4, 0, 127, 0, 7, 3, 1, 4, 3];

    SECURITY_OBJECT => "id-SecurityObject", [0, 4, 0, 127, 0, 7, 3, 2, 1];

    // ICAO machine readable travel documents

    ICAO_MRTD_SECURITY => "id-icao-mrtd-security", [2, 23, 136, 1, 1];
    LDS_SECURITY_OBJECT => "ldsSecurityObject", [2, 23, 136, 1, 1, 1];
    CSCA_MASTER_LIST => "cscaMasterList", [2, 23, 136, 1, 1, 2];
}
